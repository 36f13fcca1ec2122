//! tinct provides the color model behind a color picker: a color stored as
//! hue, saturation, value, and alpha, that reads and writes the hex, `rgb`,
//! `hsl`, and `hsv` notations.
//!
//! ```rust
//! use tinct::{Channel, Color, ColorOptions, Format};
//! let mut color = Color::new(ColorOptions::default().with_format(Format::Hsl));
//! color.from_string("rgb(0, 255, 255)");
//! assert_eq!(color.get(Channel::Hue), 180.0);
//! assert_eq!(color.value(), "hsl(180, 100%, 50%)");
//! ```

#![deny(missing_docs)]

mod color;
mod components;
mod convert;
mod error;
mod format;
mod math;
pub mod models;
mod options;
mod parse;
pub mod util;


pub use color::{Color, COMPARE_TOLERANCE};
pub use components::{Changes, Channel, Component, ComponentDetails, Components, Flags};
pub use error::{ColorFormatError, UnknownChannelError};
pub use format::Format;
pub use models::Rgb8;
pub use options::ColorOptions;
