//! Dictionary payloads shared with the device firmware.

use std::fmt;

/// Keys understood by the device. Numeric ids must match the firmware's
/// dictionary keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransportKey {
    /// Current temperature, whole degrees Celsius
    Temperature,
    /// Light (vs. dark) color scheme selected
    LightColorScheme,
    /// Display degrees Celsius (vs. Fahrenheit)
    DegreeCelsius,
}

impl TransportKey {
    /// Numeric id on the wire.
    pub fn id(self) -> u32 {
        match self {
            TransportKey::Temperature => 0,
            TransportKey::LightColorScheme => 1,
            TransportKey::DegreeCelsius => 2,
        }
    }
}

impl fmt::Display for TransportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Primitive values the device dictionary can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportValue {
    Int(i32),
    Bool(bool),
}

impl fmt::Display for TransportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportValue::Int(v) => write!(f, "{}", v),
            TransportValue::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// A small fixed-shape key/value payload for one device message.
///
/// Entries keep insertion order. A dictionary carries exactly one variant -
/// weather or configuration - and is built fresh for each send attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransportDict {
    entries: Vec<(TransportKey, TransportValue)>,
}

impl TransportDict {
    /// Weather variant: the rounded current temperature.
    pub fn weather(celsius: i32) -> Self {
        Self {
            entries: vec![(TransportKey::Temperature, TransportValue::Int(celsius))],
        }
    }

    /// Configuration variant: both preference flags, always together.
    pub fn configuration(light_color_scheme: bool, degree_celsius: bool) -> Self {
        Self {
            entries: vec![
                (
                    TransportKey::LightColorScheme,
                    TransportValue::Bool(light_color_scheme),
                ),
                (
                    TransportKey::DegreeCelsius,
                    TransportValue::Bool(degree_celsius),
                ),
            ],
        }
    }

    pub fn get(&self, key: TransportKey) -> Option<TransportValue> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    pub fn entries(&self) -> impl Iterator<Item = &(TransportKey, TransportValue)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for TransportDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_variant_shape() {
        let dict = TransportDict::weather(27);
        assert_eq!(dict.len(), 1);
        assert_eq!(
            dict.get(TransportKey::Temperature),
            Some(TransportValue::Int(27))
        );
        assert_eq!(dict.get(TransportKey::LightColorScheme), None);
        assert_eq!(dict.get(TransportKey::DegreeCelsius), None);
    }

    #[test]
    fn test_configuration_variant_shape() {
        let dict = TransportDict::configuration(true, false);
        assert_eq!(dict.len(), 2);
        assert_eq!(
            dict.get(TransportKey::LightColorScheme),
            Some(TransportValue::Bool(true))
        );
        assert_eq!(
            dict.get(TransportKey::DegreeCelsius),
            Some(TransportValue::Bool(false))
        );
        assert_eq!(dict.get(TransportKey::Temperature), None);
    }

    #[test]
    fn test_key_ids_match_firmware() {
        assert_eq!(TransportKey::Temperature.id(), 0);
        assert_eq!(TransportKey::LightColorScheme.id(), 1);
        assert_eq!(TransportKey::DegreeCelsius.id(), 2);
    }

    #[test]
    fn test_display_renders_ids_and_values() {
        assert_eq!(TransportDict::weather(-3).to_string(), "{0: -3}");
        assert_eq!(
            TransportDict::configuration(true, false).to_string(),
            "{1: true, 2: false}"
        );
    }
}
