//! # Sentiment Labels
//!
//! Known labels and their static visual treatment. The lookup is total:
//! anything the backend sends that is not a known label maps to no treatment.

use crossterm::style::Color;
use std::fmt;

/// Labels the display knows how to decorate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Icon and color pair for a known label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Treatment {
    pub icon: &'static str,
    pub color: Color,
}

/// Static label table: (wire name, sentiment, treatment, legend blurb)
const SENTIMENT_TABLE: [(&str, Sentiment, Treatment, &str); 3] = [
    (
        "positive",
        Sentiment::Positive,
        Treatment {
            icon: "♥",
            color: Color::DarkCyan,
        },
        "Uplifting, warm expressions",
    ),
    (
        "neutral",
        Sentiment::Neutral,
        Treatment {
            icon: "≈",
            color: Color::Blue,
        },
        "Balanced, like calm waters",
    ),
    (
        "negative",
        Sentiment::Negative,
        Treatment {
            icon: "☂",
            color: Color::DarkGrey,
        },
        "Overcast, subdued language",
    ),
];

impl Sentiment {
    /// All known labels in legend order
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Match a raw label exactly; unknown labels yield `None`
    pub fn from_label(label: &str) -> Option<Self> {
        SENTIMENT_TABLE
            .iter()
            .find(|(name, ..)| *name == label)
            .map(|(_, sentiment, ..)| *sentiment)
    }

    fn entry(self) -> &'static (&'static str, Sentiment, Treatment, &'static str) {
        match self {
            Sentiment::Positive => &SENTIMENT_TABLE[0],
            Sentiment::Neutral => &SENTIMENT_TABLE[1],
            Sentiment::Negative => &SENTIMENT_TABLE[2],
        }
    }

    /// Wire name of the label
    pub fn as_str(self) -> &'static str {
        self.entry().0
    }

    pub fn treatment(self) -> Treatment {
        self.entry().2
    }

    /// One-line description for the legend
    pub fn description(self) -> &'static str {
        self.entry().3
    }

    /// Capitalized name for headings
    pub fn title(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual treatment for a raw label, `None` when the label is unknown
pub fn treatment_for(label: &str) -> Option<Treatment> {
    Sentiment::from_label(label).map(Sentiment::treatment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_should_map_to_treatments() {
        assert_eq!(
            treatment_for("positive"),
            Some(Treatment {
                icon: "♥",
                color: Color::DarkCyan
            })
        );
        assert_eq!(treatment_for("negative").map(|t| t.icon), Some("☂"));
        assert_eq!(treatment_for("neutral").map(|t| t.color), Some(Color::Blue));
    }

    #[test]
    fn unknown_labels_should_have_no_treatment() {
        assert_eq!(treatment_for("ecstatic"), None);
        assert_eq!(treatment_for(""), None);
        // Matching is exact, the backend owns normalization
        assert_eq!(treatment_for("Positive"), None);
        assert_eq!(treatment_for(" positive"), None);
    }

    #[test]
    fn every_sentiment_should_round_trip_through_its_label() {
        for sentiment in Sentiment::ALL {
            assert_eq!(Sentiment::from_label(sentiment.as_str()), Some(sentiment));
            assert!(!sentiment.description().is_empty());
        }
    }

    #[test]
    fn treatments_should_be_distinct() {
        let icons: Vec<_> = Sentiment::ALL.iter().map(|s| s.treatment().icon).collect();
        assert_eq!(icons, vec!["♥", "≈", "☂"]);
    }
}
