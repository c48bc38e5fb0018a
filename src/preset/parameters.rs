//! Neon-37 parameter template.
//!
//! Every generated preset carries the same parameter block. The ids and
//! default values below are the ones the plugin's state loader expects, in
//! the order it writes them.

use std::fmt;

/// A single parameter value as it appears in a preset file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// Continuous parameter, always written with a decimal point.
    Float(f64),
    /// Choice or toggle parameter, written as bare digits.
    Int(i32),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug keeps the trailing ".0" that Display drops for whole numbers
            ParamValue::Float(v) => write!(f, "{:?}", v),
            ParamValue::Int(v) => write!(f, "{}", v),
        }
    }
}

use ParamValue::{Float, Int};

/// Number of entries in the parameter template.
pub const PARAMETER_COUNT: usize = 63;

/// Default parameter values shared by every generated preset.
pub const DEFAULT_PARAMETERS: ParameterSet = ParameterSet(&[
    ("master_volume", Float(0.0)),
    ("master_tune", Float(440.0)),
    ("osc1_wave", Int(2)),
    ("osc1_octave", Int(0)),
    ("osc1_semitones", Int(0)),
    ("osc1_fine", Float(0.0)),
    ("osc2_wave", Int(1)),
    ("osc2_octave", Int(0)),
    ("osc2_semitones", Int(0)),
    ("osc2_fine", Float(0.0)),
    ("osc_freq", Float(0.0)),
    ("osc_beat", Float(0.0)),
    ("hard_sync", Int(0)),
    ("mixer_osc1", Float(-1.0)),
    ("mixer_sub1", Float(-60.0)),
    ("mixer_osc2", Float(-3.0)),
    ("mixer_noise", Float(-60.0)),
    ("mixer_return", Float(-60.0)),
    ("cutoff", Float(8000.0)),
    ("resonance", Float(0.0)),
    ("drive", Float(1.0)),
    ("eg_depth", Float(-30.0)),
    ("key_track", Float(0.5)),
    ("env1_attack", Float(0.01)),
    ("env1_decay", Float(0.2)),
    ("env1_sustain", Float(0.5)),
    ("env1_release", Float(0.3)),
    ("env2_attack", Float(0.01)),
    ("env2_decay", Float(0.2)),
    ("env2_sustain", Float(0.5)),
    ("env2_release", Float(0.3)),
    ("env_exp_curv", Int(1)),
    ("voice_mode", Int(4)),
    ("hold_mode", Int(0)),
    ("gliss_time", Float(0.0)),
    ("gliss_rte", Int(0)),
    ("gliss_tme", Int(1)),
    ("gliss_log", Int(0)),
    ("gliss_on_gat_leg", Int(0)),
    ("lfo1_rate", Float(0.1)),
    ("lfo1_sync", Int(0)),
    ("lfo1_sync_val", Int(0)),
    ("lfo1_wave", Int(0)),
    ("lfo1_pitch", Float(0.0)),
    ("lfo1_filter", Float(0.0)),
    ("lfo1_amp", Float(0.0)),
    ("lfo2_rate", Float(0.1)),
    ("lfo2_sync", Int(0)),
    ("lfo2_sync_val", Int(0)),
    ("lfo2_wave", Int(0)),
    ("lfo2_pitch", Float(0.0)),
    ("lfo2_filter", Float(0.0)),
    ("lfo2_amp", Float(0.0)),
    ("vel_pitch", Float(0.0)),
    ("vel_filter", Float(0.3)),
    ("vel_amp", Float(0.3)),
    ("at_pitch", Float(0.0)),
    ("at_filter", Float(0.0)),
    ("at_amp", Float(0.0)),
    ("pb_pitch", Float(2.0)),
    ("mw_enable", Int(0)),
    ("lfo1_mw", Int(0)),
    ("lfo2_mw", Int(0)),
]);

/// An ordered, immutable list of parameter ids and values.
#[derive(Debug, Clone, Copy)]
pub struct ParameterSet(&'static [(&'static str, ParamValue)]);

impl ParameterSet {
    /// Returns the (id, value) pairs in file order.
    pub fn entries(&self) -> &'static [(&'static str, ParamValue)] {
        self.0
    }

    /// Returns the number of parameters in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set has no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ParamValue::{Float, Int};
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_template_size() {
        assert_eq!(DEFAULT_PARAMETERS.len(), PARAMETER_COUNT);
        assert!(!DEFAULT_PARAMETERS.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = DEFAULT_PARAMETERS.entries().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids.len(), PARAMETER_COUNT);
    }

    #[test]
    fn test_template_order() {
        let entries = DEFAULT_PARAMETERS.entries();
        assert_eq!(entries.first().map(|(id, _)| *id), Some("master_volume"));
        assert_eq!(entries.last().map(|(id, _)| *id), Some("lfo2_mw"));
    }

    #[test]
    fn test_value_formatting() {
        assert_eq!(Float(0.0).to_string(), "0.0");
        assert_eq!(Float(440.0).to_string(), "440.0");
        assert_eq!(Float(0.01).to_string(), "0.01");
        assert_eq!(Float(-60.0).to_string(), "-60.0");
        assert_eq!(Float(8000.0).to_string(), "8000.0");
        assert_eq!(Int(4).to_string(), "4");
    }
}
