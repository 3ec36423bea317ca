//! Edit Session
//!
//! Tracks whether the form targets a new record or an existing one, and
//! owns the staged field values in between.

use thiserror::Error;

use crate::models::{FeatureId, LocationFeature};

/// Which record the form currently targets.
#[derive(Debug, Clone, PartialEq)]
pub enum EditSession {
    Idle,
    Editing(FeatureId),
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub fn target(&self) -> Option<&FeatureId> {
        match self {
            Self::Idle => None,
            Self::Editing(id) => Some(id),
        }
    }

    /// Form heading for the current state.
    pub fn form_title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Location"
        } else {
            "Add Location"
        }
    }

    /// Submit button label for the current state.
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update"
        } else {
            "Save"
        }
    }

    /// The cancel button only appears while editing.
    pub fn shows_cancel(&self) -> bool {
        self.is_editing()
    }
}

/// Form values staged for the next submit. Coordinates stay as entered
/// text and are parsed at validation time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StagedLocation {
    pub name: String,
    pub description: String,
    pub lat: String,
    pub lon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Click a point on the map to fill in latitude and longitude.")]
    MissingPosition,
    #[error("Latitude and longitude must be decimal numbers.")]
    InvalidPosition,
}

impl StagedLocation {
    /// Stage an existing record's fields for editing.
    pub fn from_feature(feature: &LocationFeature) -> Self {
        Self {
            name: feature.properties.name.clone(),
            description: feature.properties.description.clone(),
            lat: feature.lat().to_string(),
            lon: feature.lon().to_string(),
        }
    }

    /// Record a map click as the staged position. Supersedes any earlier
    /// click or staged record position.
    pub fn set_position(&mut self, lat: f64, lon: f64) {
        self.lat = format!("{lat:.6}");
        self.lon = format!("{lon:.6}");
    }

    /// Check the position invariant and build the feature to send.
    /// Callers make no request when this fails.
    pub fn validate(&self) -> Result<LocationFeature, ValidationError> {
        let lat = parse_coordinate(&self.lat)?;
        let lon = parse_coordinate(&self.lon)?;
        Ok(LocationFeature::new(
            self.name.trim(),
            self.description.trim(),
            lat,
            lon,
        ))
    }
}

fn parse_coordinate(raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingPosition);
    }
    raw.parse().map_err(|_| ValidationError::InvalidPosition)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_park() -> LocationFeature {
        let mut feature = LocationFeature::new("Park", "Green", -6.9, 107.6);
        feature.id = Some(FeatureId::Text("42".to_string()));
        feature
    }

    #[test]
    fn test_idle_form_wording() {
        let session = EditSession::Idle;
        assert_eq!(session.form_title(), "Add Location");
        assert_eq!(session.submit_label(), "Save");
        assert!(!session.shows_cancel());
        assert!(session.target().is_none());
    }

    #[test]
    fn test_editing_form_wording() {
        let session = EditSession::Editing(FeatureId::Text("42".to_string()));
        assert_eq!(session.form_title(), "Edit Location");
        assert_eq!(session.submit_label(), "Update");
        assert!(session.shows_cancel());
        assert_eq!(session.target(), Some(&FeatureId::Text("42".to_string())));
    }

    #[test]
    fn test_edit_stages_record_values() {
        let staged = StagedLocation::from_feature(&make_park());
        assert_eq!(staged.name, "Park");
        assert_eq!(staged.description, "Green");
        assert_eq!(staged.lat, "-6.9");
        assert_eq!(staged.lon, "107.6");
    }

    #[test]
    fn test_missing_position_rejected_locally() {
        let staged = StagedLocation {
            name: "Park".to_string(),
            description: String::new(),
            lat: String::new(),
            lon: "107.6".to_string(),
        };
        assert_eq!(staged.validate(), Err(ValidationError::MissingPosition));

        let blank = StagedLocation {
            name: "Park".to_string(),
            ..StagedLocation::default()
        };
        assert_eq!(blank.validate(), Err(ValidationError::MissingPosition));
    }

    #[test]
    fn test_malformed_position_rejected_locally() {
        let staged = StagedLocation {
            name: "Park".to_string(),
            description: String::new(),
            lat: "north".to_string(),
            lon: "107.6".to_string(),
        };
        assert_eq!(staged.validate(), Err(ValidationError::InvalidPosition));
    }

    #[test]
    fn test_valid_submit_builds_feature() {
        let staged = StagedLocation {
            name: "  Park ".to_string(),
            description: "Green".to_string(),
            lat: "-6.9".to_string(),
            lon: "107.6".to_string(),
        };
        let feature = staged.validate().expect("valid staged values");
        assert_eq!(feature.properties.name, "Park");
        assert_eq!(feature.geometry.coordinates, [107.6, -6.9]);
        assert!(feature.id.is_none());
    }

    #[test]
    fn test_map_click_supersedes_staged_position() {
        let mut staged = StagedLocation::from_feature(&make_park());
        staged.set_position(-6.2, 106.816666);
        assert_eq!(staged.lat, "-6.200000");
        assert_eq!(staged.lon, "106.816666");
    }
}
