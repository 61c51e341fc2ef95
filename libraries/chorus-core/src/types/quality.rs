//! Audio quality reporting

use serde::{Deserialize, Serialize};

/// Rough quality classification used to pick a badge in a UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityIndicator {
    /// Lossy or otherwise unremarkable audio
    Regular,
    /// CD quality (16 bit / 44.1 kHz lossless)
    Cd,
    /// High definition (hi-res PCM or DSD)
    Hd,
}

/// Encoding as reported by the player, either a bit depth or a free-form name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawEncoding {
    /// Bit depth, e.g. 16 or 24
    Bits(u32),
    /// Textual encoding name, e.g. "DSD64"
    Text(String),
}

/// The reported playback quality of a song or album.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityStatus {
    /// Bitrate in bits per second
    pub raw_bitrate: Option<u32>,
    /// Sample rate in Hz
    pub raw_samplerate: Option<u32>,
    /// Number of channels
    pub raw_channels: Option<u32>,
    /// Encoding, if reported
    pub raw_encoding: Option<RawEncoding>,
    /// File type, e.g. "flac" or "mp3"
    pub filetype: String,
}

impl QualityStatus {
    /// Human-readable bitrate, e.g. "320 kbps". Empty when unknown.
    pub fn bitrate(&self) -> String {
        match self.raw_bitrate {
            Some(bitrate) if bitrate > 0 => format!("{} kbps", bitrate / 1000),
            _ => String::new(),
        }
    }

    /// Human-readable sample rate, e.g. "44.1 kHz". Empty when unknown.
    ///
    /// DSD streams report no PCM sample rate, so the rate is derived from the
    /// DSD multiple instead.
    pub fn samplerate(&self) -> String {
        if let Some(samplerate) = self.raw_samplerate {
            return format!("{:.1} kHz", f64::from(samplerate) / 1000.0);
        }

        if let Some(RawEncoding::Text(encoding)) = &self.raw_encoding {
            let dsd_rate = match encoding.as_str() {
                "DSD64" => Some("2822.4 kHz"),
                "DSD128" => Some("5644.8 kHz"),
                "DSD256" => Some("11289.6 kHz"),
                "DSD512" => Some("22579.2 kHz"),
                "DSD1024" => Some("45185.4 kHz"),
                _ => None,
            };
            if let Some(rate) = dsd_rate {
                return rate.to_string();
            }
        }

        String::new()
    }

    /// Human-readable encoding, e.g. "24 bits" or "DSD64". Empty when unknown.
    pub fn encoding(&self) -> String {
        match &self.raw_encoding {
            Some(RawEncoding::Text(text)) => text.clone(),
            Some(RawEncoding::Bits(bits)) => format!("{bits} bits"),
            None => String::new(),
        }
    }

    /// One-line description for display, e.g. "flac - 24 bits - 96.0 kHz".
    pub fn ui_description(&self) -> String {
        [
            self.filetype.clone(),
            self.bitrate(),
            self.encoding(),
            self.samplerate(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" - ")
    }

    /// Classify the stream for a quality badge.
    pub fn quality_indicator(&self) -> QualityIndicator {
        let filetype = self.filetype.to_uppercase();
        let samplerate = self.raw_samplerate.unwrap_or(0);

        match &self.raw_encoding {
            Some(RawEncoding::Text(text)) => {
                if text.to_uppercase().starts_with("DSD") {
                    return QualityIndicator::Hd;
                }
                if text.to_uppercase().starts_with("FLOAT") && filetype != "M4A" && samplerate > 44_000 {
                    return QualityIndicator::Hd;
                }
            }
            Some(RawEncoding::Bits(bits)) => {
                if ["FLAC", "ALAC", "AIFF", "WAV"].contains(&filetype.as_str()) {
                    if *bits >= 24 && samplerate >= 44_000 {
                        return QualityIndicator::Hd;
                    }
                    if *bits >= 16 && samplerate >= 96_000 {
                        return QualityIndicator::Hd;
                    }
                    if *bits >= 16 && samplerate >= 44_000 {
                        return QualityIndicator::Cd;
                    }
                }
            }
            None => {}
        }

        if ["DSF", "DSD", "DFF"].contains(&filetype.as_str()) {
            return QualityIndicator::Hd;
        }

        QualityIndicator::Regular
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cd_quality_flac() {
        let quality = QualityStatus {
            raw_samplerate: Some(44_100),
            raw_encoding: Some(RawEncoding::Bits(16)),
            filetype: "flac".to_string(),
            ..QualityStatus::default()
        };

        assert_eq!(quality.quality_indicator(), QualityIndicator::Cd);
        assert_eq!(quality.samplerate(), "44.1 kHz");
        assert_eq!(quality.encoding(), "16 bits");
    }

    #[test]
    fn hires_flac_is_hd() {
        let quality = QualityStatus {
            raw_samplerate: Some(96_000),
            raw_encoding: Some(RawEncoding::Bits(24)),
            filetype: "flac".to_string(),
            ..QualityStatus::default()
        };

        assert_eq!(quality.quality_indicator(), QualityIndicator::Hd);
    }

    #[test]
    fn dsd_reports_derived_samplerate() {
        let quality = QualityStatus {
            raw_encoding: Some(RawEncoding::Text("DSD64".to_string())),
            filetype: "dsf".to_string(),
            ..QualityStatus::default()
        };

        assert_eq!(quality.quality_indicator(), QualityIndicator::Hd);
        assert_eq!(quality.samplerate(), "2822.4 kHz");
    }

    #[test]
    fn mp3_is_regular() {
        let quality = QualityStatus {
            raw_bitrate: Some(320_000),
            raw_samplerate: Some(44_100),
            filetype: "mp3".to_string(),
            ..QualityStatus::default()
        };

        assert_eq!(quality.quality_indicator(), QualityIndicator::Regular);
        assert_eq!(quality.bitrate(), "320 kbps");
    }

    #[test]
    fn ui_description_joins_known_parts() {
        let quality = QualityStatus {
            raw_encoding: Some(RawEncoding::Bits(24)),
            raw_samplerate: Some(96_000),
            filetype: "flac".to_string(),
            ..QualityStatus::default()
        };

        assert_eq!(quality.ui_description(), "flac - 24 bits - 96.0 kHz");
    }
}
