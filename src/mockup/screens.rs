//! Content of the three mock phone screens.
//!
//! Each screen is drawn at a horizontal offset `x` inside the phone frame at
//! the same offset. Layouts are fixed; lists of entries are stacked or laid
//! out in a grid with constant spacing.

use super::{Pen, SCREEN_H, SCREEN_TOP, SCREEN_W};
use crate::draw::color::{
    ACCENT, ACCENT_DARK, AVATAR_FILL, PHOTO_FILL, TEXT_PRIMARY, TEXT_SECONDARY, WARNING, WHITE,
};
use crate::draw::render::{Anchor, TextStyle};
use crate::draw::{Canvas, RenderError};
use crate::util::{Rect, circle_bounds};

/// One of the mocked screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Personal center entry: login card, shortcuts and data overview
    Main,
    /// Grouped list of brewing devices
    Devices,
    /// Bean inventory grid
    Inventory,
}

impl Screen {
    /// Draws this screen's content at horizontal offset `x`.
    pub fn draw(self, canvas: &Canvas, x: f64) -> Result<(), RenderError> {
        match self {
            Screen::Main => draw_main_screen(canvas, x),
            Screen::Devices => draw_device_screen(canvas, x),
            Screen::Inventory => draw_inventory_screen(canvas, x),
        }
    }
}

/// A shortcut card on the main screen.
#[derive(Debug, Clone, Copy)]
pub struct Shortcut {
    pub title: &'static str,
    pub description: &'static str,
}

/// A group of devices on the device screen.
#[derive(Debug, Clone, Copy)]
pub struct DeviceGroup {
    pub name: &'static str,
    pub devices: &'static [&'static str],
}

/// A bean card on the inventory screen.
#[derive(Debug, Clone, Copy)]
pub struct BeanCard {
    pub name: &'static str,
    pub roast: &'static str,
    pub remaining_grams: u32,
    /// Draws the "running low" badge
    pub running_low: bool,
}

impl BeanCard {
    /// Second line of the card, e.g. "浅烘 · 余 120g".
    pub fn summary(&self) -> String {
        format!("{} · 余 {}g", self.roast, self.remaining_grams)
    }
}

pub const SHORTCUTS: [Shortcut; 2] = [
    Shortcut {
        title: "常用冲煮设备",
        description: "手冲/意式设备一键选",
    },
    Shortcut {
        title: "豆子库存管理",
        description: "剩余克数实时提醒",
    },
];

pub const DEVICE_GROUPS: [DeviceGroup; 3] = [
    DeviceGroup {
        name: "手冲设备",
        devices: &["Fellow Stagg EKG", "ORIGAMI Dripper"],
    },
    DeviceGroup {
        name: "意式设备",
        devices: &["La Marzocco Linea Mini"],
    },
    DeviceGroup {
        name: "磨豆机",
        devices: &["小飞鹰 640S (默认)", "Comandante C40 MK4"],
    },
];

pub const BEAN_CARDS: [BeanCard; 4] = [
    BeanCard {
        name: "花魁 #102",
        roast: "浅烘",
        remaining_grams: 120,
        running_low: true,
    },
    BeanCard {
        name: "巴拿马 翡翠",
        roast: "中烘",
        remaining_grams: 45,
        running_low: false,
    },
    BeanCard {
        name: "耶加雪菲",
        roast: "浅烘",
        remaining_grams: 18,
        running_low: true,
    },
    BeanCard {
        name: "宏都拉斯",
        roast: "深烘",
        remaining_grams: 200,
        running_low: false,
    },
];

const CHEVRON: &str = "›";

// ============================================================================
// Main screen
// ============================================================================

const MAIN_PADDING: f64 = 24.0;
const SHORTCUT_HEIGHT: f64 = 120.0;
const SHORTCUT_GAP: f64 = 20.0;
const AVATAR_RADIUS: f64 = 35.0;

/// Login card bounds on the main screen.
pub fn login_card_bounds(x: f64) -> Rect {
    let top = SCREEN_TOP + MAIN_PADDING;
    Rect::new(x + MAIN_PADDING, top, x + SCREEN_W - MAIN_PADDING, top + 140.0)
}

/// Bounds of the shortcut card at `index`.
pub fn shortcut_bounds(x: f64, index: usize) -> Rect {
    let top = login_card_bounds(x).y2 + 70.0 + index as f64 * (SHORTCUT_HEIGHT + SHORTCUT_GAP);
    Rect::new(
        x + MAIN_PADDING,
        top,
        x + SCREEN_W - MAIN_PADDING,
        top + SHORTCUT_HEIGHT,
    )
}

fn draw_main_screen(canvas: &Canvas, x: f64) -> Result<(), RenderError> {
    let pen = Pen::new(canvas)?;
    let card = login_card_bounds(x);

    pen.card(card, 28.0, WHITE.with_alpha(230))?;
    pen.glow(
        Rect::new(card.x1, card.y1 - 50.0, card.x2, card.y1 + 50.0),
        ACCENT,
        60.0,
        90,
    )?;

    let (ax, ay) = (card.x1 + AVATAR_RADIUS + 20.0, card.y1 + 70.0);
    pen.ellipse(circle_bounds(ax, ay, AVATAR_RADIUS), AVATAR_FILL)?;
    pen.text(
        "豆",
        ax,
        ay,
        TextStyle::bold(30.0, ACCENT_DARK),
        Anchor::MiddleMiddle,
    )?;
    pen.text(
        "微信授权登录",
        ax + 90.0,
        ay - 16.0,
        TextStyle::bold(24.0, TEXT_PRIMARY),
        Anchor::LeftMiddle,
    )?;
    pen.text(
        "解锁个人中心功能",
        ax + 90.0,
        ay + 16.0,
        TextStyle::regular(18.0, TEXT_SECONDARY),
        Anchor::LeftMiddle,
    )?;

    let button = Rect::new(card.x2 - 140.0, card.y2 - 46.0, card.x2 - 24.0, card.y2 - 10.0);
    pen.card(button, 20.0, ACCENT)?;
    let (bx, by) = button.center();
    pen.text(
        "去登录",
        bx,
        by,
        TextStyle::bold(20.0, WHITE),
        Anchor::MiddleMiddle,
    )?;

    pen.text(
        "功能快捷入口",
        x + MAIN_PADDING,
        card.y2 + 40.0,
        TextStyle::bold(20.0, TEXT_PRIMARY),
        Anchor::LeftTop,
    )?;

    for (index, shortcut) in SHORTCUTS.iter().enumerate() {
        let bounds = shortcut_bounds(x, index);
        pen.card(bounds, 26.0, WHITE.with_alpha(245))?;
        pen.text(
            shortcut.title,
            bounds.x1 + 24.0,
            bounds.y1 + 30.0,
            TextStyle::bold(22.0, TEXT_PRIMARY),
            Anchor::LeftTop,
        )?;
        pen.text(
            shortcut.description,
            bounds.x1 + 24.0,
            bounds.y1 + 70.0,
            TextStyle::regular(18.0, TEXT_SECONDARY),
            Anchor::LeftTop,
        )?;
        pen.text(
            CHEVRON,
            bounds.x2 - 20.0,
            bounds.y1 + SHORTCUT_HEIGHT / 2.0,
            TextStyle::regular(36.0, ACCENT_DARK),
            Anchor::MiddleMiddle,
        )?;
    }

    let pill = Rect::new(
        x + MAIN_PADDING,
        SCREEN_TOP + SCREEN_H - 120.0,
        x + SCREEN_W - MAIN_PADDING,
        SCREEN_TOP + SCREEN_H - 60.0,
    );
    pen.card(pill, 32.0, WHITE.with_alpha(235))?;
    pen.text(
        "数据概览",
        pill.x1 + 20.0,
        pill.y1 + 20.0,
        TextStyle::bold(20.0, TEXT_PRIMARY),
        Anchor::LeftTop,
    )?;
    pen.text(
        "默认设备 2 台 · 在库豆子 5 款",
        pill.x1 + 20.0,
        pill.y1 + 52.0,
        TextStyle::regular(16.0, TEXT_SECONDARY),
        Anchor::LeftTop,
    )
}

// ============================================================================
// Device screen
// ============================================================================

const DEVICE_PADDING: f64 = 20.0;
/// Vertical advance per device card
const DEVICE_STEP: f64 = 100.0;

/// Bounds of every device card, in drawing order.
///
/// Each group title sits at the running cursor, which then advances 10px;
/// every card starts 20px below the cursor and advances it by
/// [`DEVICE_STEP`].
pub fn device_card_bounds(x: f64) -> Vec<Rect> {
    let mut cursor = SCREEN_TOP + 140.0;
    let mut cards = Vec::new();
    for group in DEVICE_GROUPS {
        cursor += 10.0;
        for _ in group.devices {
            cards.push(Rect::new(
                x + DEVICE_PADDING,
                cursor + 20.0,
                x + SCREEN_W - DEVICE_PADDING,
                cursor + 110.0,
            ));
            cursor += DEVICE_STEP;
        }
    }
    cards
}

fn draw_device_screen(canvas: &Canvas, x: f64) -> Result<(), RenderError> {
    let pen = Pen::new(canvas)?;

    pen.text(
        "常用冲煮设备",
        x + SCREEN_W / 2.0,
        SCREEN_TOP + 36.0,
        TextStyle::bold(24.0, TEXT_PRIMARY),
        Anchor::MiddleMiddle,
    )?;
    pen.card(
        Rect::new(
            x + DEVICE_PADDING,
            SCREEN_TOP + 70.0,
            x + SCREEN_W - DEVICE_PADDING,
            SCREEN_TOP + 120.0,
        ),
        22.0,
        WHITE.with_alpha(230),
    )?;
    pen.text(
        "＋  添加设备",
        x + DEVICE_PADDING + 10.0,
        SCREEN_TOP + 90.0,
        TextStyle::bold(20.0, ACCENT_DARK),
        Anchor::LeftTop,
    )?;

    let mut cards = device_card_bounds(x).into_iter();
    for group in DEVICE_GROUPS {
        // Group titles sit 30px above the first card of the group.
        let Some(first) = cards.as_slice().first().copied() else {
            break;
        };
        pen.text(
            group.name,
            x + DEVICE_PADDING,
            first.y1 - 30.0,
            TextStyle::bold(20.0, TEXT_PRIMARY),
            Anchor::LeftTop,
        )?;

        for (device, card) in group.devices.iter().zip(cards.by_ref()) {
            pen.card(card, 24.0, WHITE.with_alpha(245))?;
            pen.text(
                device,
                card.x1 + 20.0,
                card.y1 + 20.0,
                TextStyle::bold(20.0, TEXT_PRIMARY),
                Anchor::LeftTop,
            )?;
            pen.text(
                "品牌 · 型号",
                card.x1 + 20.0,
                card.y1 + 60.0,
                TextStyle::regular(16.0, TEXT_SECONDARY),
                Anchor::LeftTop,
            )?;
            pen.text(
                CHEVRON,
                card.x2 - 30.0,
                card.center().1,
                TextStyle::regular(32.0, ACCENT_DARK),
                Anchor::MiddleMiddle,
            )?;
        }
    }
    Ok(())
}

// ============================================================================
// Inventory screen
// ============================================================================

const INVENTORY_PADDING: f64 = 18.0;
const BEAN_COLUMNS: usize = 2;
const BEAN_GAP_X: f64 = 20.0;
const BEAN_GAP_Y: f64 = 24.0;
const BEAN_CARD_H: f64 = 170.0;

/// Width of a bean card: two columns with a gap, inside the padding.
pub fn bean_card_width() -> f64 {
    (SCREEN_W - INVENTORY_PADDING * 2.0 - BEAN_GAP_X) / BEAN_COLUMNS as f64
}

/// Bounds of the bean card at `index` in the two-column grid.
pub fn bean_card_bounds(x: f64, index: usize) -> Rect {
    let row = (index / BEAN_COLUMNS) as f64;
    let col = (index % BEAN_COLUMNS) as f64;
    let width = bean_card_width();
    let left = x + INVENTORY_PADDING + col * (width + BEAN_GAP_X);
    let top = SCREEN_TOP + 140.0 + row * (BEAN_CARD_H + BEAN_GAP_Y);
    Rect::from_origin_size(left, top, width, BEAN_CARD_H)
}

fn draw_inventory_screen(canvas: &Canvas, x: f64) -> Result<(), RenderError> {
    let pen = Pen::new(canvas)?;

    pen.text(
        "豆子库存管理",
        x + SCREEN_W / 2.0,
        SCREEN_TOP + 36.0,
        TextStyle::bold(24.0, TEXT_PRIMARY),
        Anchor::MiddleMiddle,
    )?;

    let tabs = Rect::new(
        x + INVENTORY_PADDING,
        SCREEN_TOP + 70.0,
        x + SCREEN_W - INVENTORY_PADDING,
        SCREEN_TOP + 110.0,
    );
    pen.card(tabs, 26.0, WHITE.with_alpha(200))?;
    let (mid, tab_y) = tabs.center();
    pen.card(
        Rect::new(tabs.x1 + 8.0, tabs.y1 + 6.0, mid - 8.0, tabs.y2 - 6.0),
        20.0,
        ACCENT,
    )?;
    pen.text(
        "在库",
        (tabs.x1 + mid) / 2.0,
        tab_y,
        TextStyle::bold(18.0, WHITE),
        Anchor::MiddleMiddle,
    )?;
    pen.text(
        "已用完",
        (mid + tabs.x2) / 2.0,
        tab_y,
        TextStyle::regular(18.0, TEXT_SECONDARY),
        Anchor::MiddleMiddle,
    )?;

    for (index, bean) in BEAN_CARDS.iter().enumerate() {
        let card = bean_card_bounds(x, index);
        let (left, top) = (card.x1, card.y1);

        pen.card(card, 24.0, WHITE.with_alpha(240))?;
        pen.rect(
            Rect::new(left + 16.0, top + 16.0, card.x2 - 16.0, top + 70.0),
            PHOTO_FILL,
        )?;
        pen.text(
            bean.name,
            left + 24.0,
            top + 90.0,
            TextStyle::bold(18.0, TEXT_PRIMARY),
            Anchor::LeftTop,
        )?;
        pen.text(
            &bean.summary(),
            left + 24.0,
            top + 120.0,
            TextStyle::regular(16.0, TEXT_SECONDARY),
            Anchor::LeftTop,
        )?;

        if bean.running_low {
            pen.card(
                Rect::new(left + 24.0, top + 135.0, left + 110.0, top + 160.0),
                14.0,
                WARNING,
            )?;
            pen.text(
                "即将用完",
                left + 67.0,
                top + 147.0,
                TextStyle::bold(14.0, WHITE),
                Anchor::MiddleMiddle,
            )?;
        }
    }

    let footer = Rect::new(
        x + INVENTORY_PADDING,
        SCREEN_TOP + SCREEN_H - 140.0,
        x + SCREEN_W - INVENTORY_PADDING,
        SCREEN_TOP + SCREEN_H - 70.0,
    );
    pen.card(footer, 30.0, WHITE.with_alpha(235))?;
    pen.text(
        "记录消耗 / 标记已用完",
        footer.x1 + 20.0,
        footer.y1 + 20.0,
        TextStyle::bold(18.0, TEXT_PRIMARY),
        Anchor::LeftTop,
    )?;
    pen.text(
        "长按卡片可快速减重",
        footer.x1 + 20.0,
        footer.y1 + 50.0,
        TextStyle::regular(16.0, TEXT_SECONDARY),
        Anchor::LeftTop,
    )
}
