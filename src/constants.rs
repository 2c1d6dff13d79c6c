pub const WINDOW_WIDTH: i32 = 1280;            // Default window width
pub const WINDOW_HEIGHT: i32 = 720;            // Default window height
pub const FPS: u32 = 60;                       // Frames per second

pub const TITLE_BAR_HEIGHT: f32 = 56.0;        // Height of each collapsed title bar
pub const TITLE_FONT_SIZE: i32 = 24;           // Title label font size
pub const CONTENT_FONT_SIZE: i32 = 20;         // Panel body font size
pub const CONTENT_LINE_HEIGHT: f32 = 26.0;     // Vertical advance per body line
pub const GLYPH_RADIUS: f32 = 14.0;            // Radius of the +/x circle glyphs
pub const GLYPH_MARGIN: f32 = 12.0;            // Gap between glyphs and the bar edges
pub const PANEL_PADDING: f32 = 16.0;           // Inner padding of an open info panel
