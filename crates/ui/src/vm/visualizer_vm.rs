use phono_core::model::{ArticulationLookup, TonguePosition};

/// Diagram rendering mode; only the sagittal view draws articulators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Sagittal,
    ThreeD,
    Waveform,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [Self::Sagittal, Self::ThreeD, Self::Waveform];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Sagittal => "Sagittal View",
            ViewMode::ThreeD => "3D Model",
            ViewMode::Waveform => "Waveform",
        }
    }
}

impl ViewMode {
    /// Caption under the non-sagittal placeholders.
    #[must_use]
    pub fn caption(self) -> Option<&'static str> {
        match self {
            ViewMode::Sagittal => None,
            ViewMode::ThreeD => Some("3D articulation model would appear here"),
            ViewMode::Waveform => Some("Audio waveform and spectrogram"),
        }
    }
}

/// Simulated waveform drawn in a 200x60 box.
pub const WAVEFORM_PATH: &str = "M0 30 Q25 10 50 30 T100 30 T150 30 T200 30";

/// Generic coaching shown beside the diagram.
pub const PRONUNCIATION_TIPS: [(&str, &str); 3] = [
    (
        "Tip",
        "Focus on the tongue position and lip shape shown in the visualization.",
    ),
    (
        "Practice",
        "Try to match the articulation while listening to the audio.",
    ),
    (
        "Common mistake",
        "Compare the voicing row: a voiced sound should buzz, a voiceless one should not.",
    ),
];

/// Playback speed steps, in tenths: 0.5x to 2.0x.
pub const SPEED_STEPS: [u8; 4] = [5, 10, 15, 20];

#[must_use]
pub fn speed_label(tenths: u8) -> String {
    format!("{}.{}x", tenths / 10, tenths % 10)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticulationRowVm {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArticulationPanelVm {
    Found {
        title: String,
        rows: Vec<ArticulationRowVm>,
    },
    NotFound {
        message: String,
    },
}

#[must_use]
pub fn map_articulation_panel(symbol: &str, lookup: ArticulationLookup<'_>) -> ArticulationPanelVm {
    match lookup {
        ArticulationLookup::Found(record) => ArticulationPanelVm::Found {
            title: record.description.to_string(),
            rows: vec![
                ArticulationRowVm {
                    label: "Tongue",
                    value: record.tongue.to_string(),
                },
                ArticulationRowVm {
                    label: "Lips",
                    value: record.lips.to_string(),
                },
                ArticulationRowVm {
                    label: "Velum",
                    value: record.velum.to_string(),
                },
                ArticulationRowVm {
                    label: "Voicing",
                    value: record.voicing.to_string(),
                },
            ],
        },
        ArticulationLookup::NotFound => ArticulationPanelVm::NotFound {
            message: format!("No articulation data for /{symbol}/ yet."),
        },
    }
}

/// SVG `(cx, cy)` attribute strings for the tongue marker.
#[must_use]
pub fn marker_coords(position: TonguePosition) -> (String, String) {
    (position.x.to_string(), position.y.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::ExplorerService;

    #[test]
    fn found_panel_lists_articulators() {
        let explorer = ExplorerService::default();
        let ArticulationPanelVm::Found { title, rows } =
            map_articulation_panel("i", explorer.articulation("i"))
        else {
            panic!("expected record for i");
        };
        assert_eq!(title, "Close front unrounded vowel");
        assert_eq!(rows[0].value, "high front");
        assert_eq!(rows[3].value, "voiced");
    }

    #[test]
    fn missing_symbol_gets_message() {
        let explorer = ExplorerService::default();
        assert_eq!(
            map_articulation_panel("ʒ", explorer.articulation("ʒ")),
            ArticulationPanelVm::NotFound {
                message: "No articulation data for /ʒ/ yet.".into()
            }
        );
    }

    #[test]
    fn only_placeholder_modes_have_captions() {
        assert_eq!(ViewMode::Sagittal.caption(), None);
        assert_eq!(
            ViewMode::Waveform.caption(),
            Some("Audio waveform and spectrogram")
        );
        assert!(ViewMode::ThreeD.caption().is_some());
    }

    #[test]
    fn speeds_render_with_one_decimal() {
        let labels: Vec<_> = SPEED_STEPS.iter().map(|s| speed_label(*s)).collect();
        assert_eq!(labels, vec!["0.5x", "1.0x", "1.5x", "2.0x"]);
    }
}
