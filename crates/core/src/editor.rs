//! State container for one color card: the current color, the raw text of
//! each channel field, and each field's validation error.
//!
//! Keystrokes are recorded without validation; validation runs when the
//! field is committed (blur or Enter). A failed commit leaves the last valid
//! value in place and only touches its own channel.

use crate::channel::{check_bounds, validate_channel, Channel};
use crate::color::OkLch;
use crate::config::ExplorerConfig;
use crate::error::{ExplorerError, ValidationError};
use crate::format::ColorReport;
use crate::random::{random_color, RandomSource};

#[derive(Debug, Clone, PartialEq)]
pub struct ColorEditor {
    color: OkLch,
    inputs: [String; 3],
    errors: [Option<ValidationError>; 3],
}

impl ColorEditor {
    /// Starts from `color`, with each text field showing its channel value.
    pub fn new(color: OkLch) -> Self {
        Self {
            color,
            inputs: Channel::ALL.map(|ch| color.channel(ch).to_string()),
            errors: [None, None, None],
        }
    }

    /// Starts from a random in-gamut color drawn from the configured lightness range.
    pub fn random(
        config: &ExplorerConfig,
        rng: &mut impl RandomSource,
    ) -> Result<Self, ExplorerError> {
        Ok(Self::new(random_color(config.random_lightness, rng)?))
    }

    /// The last valid color.
    pub fn color(&self) -> OkLch {
        self.color
    }

    /// Raw text of a channel field, possibly invalid.
    pub fn input(&self, channel: Channel) -> &str {
        &self.inputs[channel.index()]
    }

    pub fn error(&self, channel: Channel) -> Option<&ValidationError> {
        self.errors[channel.index()].as_ref()
    }

    /// Current errors in channel order.
    pub fn errors(&self) -> Vec<&ValidationError> {
        self.errors.iter().flatten().collect()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.iter().all(Option::is_none)
    }

    /// Records typed text. Nothing is validated until [`ColorEditor::commit`].
    pub fn edit(&mut self, channel: Channel, text: &str) {
        self.inputs[channel.index()] = text.to_string();
    }

    /// Validates one field and applies it on success.
    ///
    /// On failure the error is stored for that field and returned; the
    /// color keeps its last valid value and the raw text stays as typed.
    pub fn commit(&mut self, channel: Channel) -> Result<OkLch, ValidationError> {
        let idx = channel.index();
        match validate_channel(channel, &self.inputs[idx]) {
            Ok(value) => {
                self.color = self.color.with_channel(channel, value);
                self.errors[idx] = None;
                Ok(self.color)
            }
            Err(err) => {
                self.errors[idx] = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Slider input: a numeric value that still goes through the channel bounds.
    ///
    /// On success the text field is overwritten with the value and any
    /// pending error on that field is cleared.
    pub fn slide(&mut self, channel: Channel, value: f64) -> Result<OkLch, ValidationError> {
        let value = check_bounds(channel, value)?;
        let idx = channel.index();
        self.color = self.color.with_channel(channel, value);
        self.inputs[idx] = value.to_string();
        self.errors[idx] = None;
        Ok(self.color)
    }

    /// Everything the card shows for the current color.
    pub fn report(&self, config: &ExplorerConfig) -> ColorReport {
        ColorReport::new(self.color, config)
    }
}
