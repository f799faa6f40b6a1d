//! SSD1306 OLED display wrapper.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::error::Error;
use crate::ui::view::{LockLabel, View};

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

fn text_style(font: &'static MonoFont<'static>, inverted: bool) -> MonoTextStyle<'static, BinaryColor> {
    let (fg, bg) = if inverted {
        (BinaryColor::Off, BinaryColor::On)
    } else {
        (BinaryColor::On, BinaryColor::Off)
    };
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(fg)
        .background_color(bg)
        .build()
}

/// Render one frame.
///
/// LOCK is drawn inverted (filled screen) so it reads at a glance;
/// every other frame is light-on-dark.
pub fn present<I2C>(display: &mut Display<I2C>, view: &View) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let inverted = matches!(
        view,
        View::Lock {
            label: LockLabel::Lock,
            ..
        }
    );

    display.clear_buffer();
    if inverted {
        let _ = Rectangle::new(Point::zero(), Size::new(128, 64))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(display);
    }

    if let Some(caption) = view.caption() {
        let _ = Text::new(caption, Point::new(0, 10), text_style(&FONT_6X10, inverted)).draw(display);
    }

    let body = view.body();
    let _ = Text::with_alignment(
        body.as_str(),
        Point::new(64, 44),
        text_style(&FONT_10X20, inverted),
        Alignment::Center,
    )
    .draw(display);

    display.flush().map_err(|_| Error::Display)
}
