//! The scalar channels a [`Color`](crate::Color) is made of, and the records
//! used to change several of them at once.

use std::str::FromStr;

use bitflags::bitflags;

use crate::error::UnknownChannelError;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all channels are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all channels are stored as.
pub type Component = f64;

/// Represent the three components that describe a color in any notation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// One of the four channels stored by a [`Color`](crate::Color).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Hue in degrees.
    Hue,
    /// Saturation in percent.
    Saturation,
    /// Value (brightness) in percent.
    Value,
    /// Opacity in percent.
    Alpha,
}

impl Channel {
    /// All channels, in storage order.
    pub const ALL: [Channel; 4] = [
        Channel::Hue,
        Channel::Saturation,
        Channel::Value,
        Channel::Alpha,
    ];

    /// The lowercase name of the channel.
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Hue => "hue",
            Channel::Saturation => "saturation",
            Channel::Value => "value",
            Channel::Alpha => "alpha",
        }
    }

    fn flag(&self) -> Flags {
        match self {
            Channel::Hue => Flags::HUE_IS_NONE,
            Channel::Saturation => Flags::SATURATION_IS_NONE,
            Channel::Value => Flags::VALUE_IS_NONE,
            Channel::Alpha => Flags::ALPHA_IS_NONE,
        }
    }
}

impl FromStr for Channel {
    type Err = UnknownChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::ALL
            .into_iter()
            .find(|channel| channel.name() == s)
            .ok_or_else(|| UnknownChannelError::new(s))
    }
}

bitflags! {
    /// Flags to mark the channels that are absent from a [`Changes`] record.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Flags : u8 {
        /// Set when the hue is not part of the record.
        const HUE_IS_NONE = 1 << 0;
        /// Set when the saturation is not part of the record.
        const SATURATION_IS_NONE = 1 << 1;
        /// Set when the value is not part of the record.
        const VALUE_IS_NONE = 1 << 2;
        /// Set when the alpha is not part of the record.
        const ALPHA_IS_NONE = 1 << 3;
    }
}

/// A partial record of channel values, applied in one go by
/// [`Color::set_many`](crate::Color::set_many).
///
/// Each channel can be passed as a plain [`Component`] or as an
/// `Option<Component>`, where `None` leaves that channel alone:
/// ```rust
/// use tinct::Changes;
/// let changes = Changes::new(180.0, 50.0, 75.0, None);
/// assert_eq!(changes.alpha(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Changes {
    values: [Component; 4],
    flags: Flags,
}

impl Changes {
    /// Create a record with the given channels present.
    pub fn new(
        hue: impl Into<ComponentDetails>,
        saturation: impl Into<ComponentDetails>,
        value: impl Into<ComponentDetails>,
        alpha: impl Into<ComponentDetails>,
    ) -> Self {
        let mut flags = Flags::empty();

        let hue = hue.into().value_and_flag(&mut flags, Flags::HUE_IS_NONE);
        let saturation = saturation
            .into()
            .value_and_flag(&mut flags, Flags::SATURATION_IS_NONE);
        let value = value
            .into()
            .value_and_flag(&mut flags, Flags::VALUE_IS_NONE);
        let alpha = alpha
            .into()
            .value_and_flag(&mut flags, Flags::ALPHA_IS_NONE);

        Self {
            values: [hue, saturation, value, alpha],
            flags,
        }
    }

    /// A record with no channel present.
    pub fn none() -> Self {
        Self {
            values: [0.0; 4],
            flags: Flags::all(),
        }
    }

    /// Add or replace a channel in this record.
    #[must_use]
    pub fn with(mut self, channel: Channel, value: Component) -> Self {
        self.values[channel as usize] = value;
        self.flags.remove(channel.flag());
        self
    }

    /// Return the value for `channel`, if present.
    pub fn get(&self, channel: Channel) -> Option<Component> {
        if self.flags.contains(channel.flag()) {
            None
        } else {
            Some(self.values[channel as usize])
        }
    }

    /// Return the hue, if present.
    pub fn hue(&self) -> Option<Component> {
        self.get(Channel::Hue)
    }

    /// Return the saturation, if present.
    pub fn saturation(&self) -> Option<Component> {
        self.get(Channel::Saturation)
    }

    /// Return the value (brightness), if present.
    pub fn value(&self) -> Option<Component> {
        self.get(Channel::Value)
    }

    /// Return the alpha, if present.
    pub fn alpha(&self) -> Option<Component> {
        self.get(Channel::Alpha)
    }

    /// The flags marking absent channels.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Iterate over the present channels and their values.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, Component)> + '_ {
        Channel::ALL
            .into_iter()
            .filter_map(move |channel| self.get(channel).map(|value| (channel, value)))
    }
}

impl Default for Changes {
    fn default() -> Self {
        Self::none()
    }
}

/// A struct that holds details about a channel passed to [`Changes::new`].
/// Any value that can be passed implements a `From<?> for ComponentDetails`.
pub struct ComponentDetails {
    value: Component,
    is_none: bool,
}

impl ComponentDetails {
    /// Extract the value and set the given flag if the channel is none.
    pub fn value_and_flag(&self, flags: &mut Flags, flag: Flags) -> Component {
        if self.is_none {
            *flags |= flag;
        }
        self.value
    }
}

impl From<Component> for ComponentDetails {
    fn from(value: Component) -> Self {
        Self {
            value,
            is_none: false,
        }
    }
}

impl From<Option<Component>> for ComponentDetails {
    fn from(value: Option<Component>) -> Self {
        if let Some(value) = value {
            Self::from(value)
        } else {
            Self {
                value: 0.0,
                is_none: true,
            }
        }
    }
}
