use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// Text written for an unset field in the display form.
const UNSET: &str = "null";

/// Four-part identifier of a packaged software component.
///
/// No field is required and none is validated. The display form is
/// `groupId:artifactId:classifier:type` with `null` standing in for any
/// unset field, so `ArtifactCoordinate::of("org.example", "widget")`
/// displays as `org.example:widget:null:null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactCoordinate {
    group_id: Option<String>,
    artifact_id: Option<String>,
    classifier: Option<String>,
    #[serde(rename = "type")]
    artifact_type: Option<String>,
}

impl ArtifactCoordinate {
    /// A coordinate with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Group and artifact only.
    pub fn of(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        let mut coordinate = Self::new();
        coordinate.group_id = Some(group_id.into());
        coordinate.artifact_id = Some(artifact_id.into());
        coordinate
    }

    /// All four fields.
    pub fn full(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        classifier: impl Into<String>,
        artifact_type: impl Into<String>,
    ) -> Self {
        let mut coordinate = Self::of(group_id, artifact_id);
        coordinate.classifier = Some(classifier.into());
        coordinate.artifact_type = Some(artifact_type.into());
        coordinate
    }

    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn artifact_id(&self) -> Option<&str> {
        self.artifact_id.as_deref()
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn artifact_type(&self) -> Option<&str> {
        self.artifact_type.as_deref()
    }

    pub fn set_group_id(&mut self, group_id: Option<String>) {
        self.group_id = group_id;
    }

    pub fn set_artifact_id(&mut self, artifact_id: Option<String>) {
        self.artifact_id = artifact_id;
    }

    pub fn set_classifier(&mut self, classifier: Option<String>) {
        self.classifier = classifier;
    }

    pub fn set_artifact_type(&mut self, artifact_type: Option<String>) {
        self.artifact_type = artifact_type;
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.group_id().unwrap_or(UNSET),
            self.artifact_id().unwrap_or(UNSET),
            self.classifier().unwrap_or(UNSET),
            self.artifact_type().unwrap_or(UNSET),
        )
    }
}

impl FromStr for ArtifactCoordinate {
    type Err = DomainError;

    /// Parse `g:a`, `g:a:c` or `g:a:c:t`. A `null` segment is unset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split(':').collect();
        if !(2..=4).contains(&segments.len()) {
            return Err(DomainError::InvalidCoordinate {
                input: s.into(),
                reason: format!("expected 2 to 4 ':'-separated segments, found {}", segments.len()),
            });
        }

        let field = |index: usize| {
            segments
                .get(index)
                .filter(|segment| **segment != UNSET)
                .map(|segment| (*segment).to_string())
        };

        let mut coordinate = Self::new();
        coordinate.set_group_id(field(0));
        coordinate.set_artifact_id(field(1));
        coordinate.set_classifier(field(2));
        coordinate.set_artifact_type(field(3));
        Ok(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_coordinate_displays_null_for_every_field() {
        assert_eq!(ArtifactCoordinate::new().to_string(), "null:null:null:null");
    }

    #[test]
    fn group_and_artifact_leave_the_rest_null() {
        let coordinate = ArtifactCoordinate::of("org.example", "widget");
        assert_eq!(coordinate.to_string(), "org.example:widget:null:null");
        assert_eq!(coordinate.classifier(), None);
        assert_eq!(coordinate.artifact_type(), None);
    }

    #[test]
    fn full_coordinate_displays_every_field() {
        assert_eq!(ArtifactCoordinate::full("g", "a", "c", "t").to_string(), "g:a:c:t");
    }

    #[test]
    fn each_setter_changes_only_its_field() {
        let mut coordinate = ArtifactCoordinate::full("g", "a", "c", "t");

        coordinate.set_group_id(Some("g2".into()));
        assert_eq!(coordinate.to_string(), "g2:a:c:t");

        coordinate.set_artifact_id(Some("a2".into()));
        assert_eq!(coordinate.to_string(), "g2:a2:c:t");

        coordinate.set_classifier(Some("c2".into()));
        assert_eq!(coordinate.to_string(), "g2:a2:c2:t");

        coordinate.set_artifact_type(Some("t2".into()));
        assert_eq!(coordinate.to_string(), "g2:a2:c2:t2");

        coordinate.set_classifier(None);
        assert_eq!(coordinate.to_string(), "g2:a2:null:t2");
    }

    #[test]
    fn empty_strings_are_kept_verbatim() {
        let coordinate = ArtifactCoordinate::full("", "a", "", "jar");
        assert_eq!(coordinate.group_id(), Some(""));
        assert_eq!(coordinate.to_string(), ":a::jar");
    }

    #[test]
    fn parses_two_three_and_four_segments() {
        let two: ArtifactCoordinate = "org.example:widget".parse().unwrap();
        assert_eq!(two, ArtifactCoordinate::of("org.example", "widget"));

        let three: ArtifactCoordinate = "g:a:sources".parse().unwrap();
        assert_eq!(three.classifier(), Some("sources"));
        assert_eq!(three.artifact_type(), None);

        let four: ArtifactCoordinate = "g:a:c:t".parse().unwrap();
        assert_eq!(four, ArtifactCoordinate::full("g", "a", "c", "t"));
    }

    #[test]
    fn null_segments_parse_as_unset() {
        let parsed: ArtifactCoordinate = "org.example:widget:null:null".parse().unwrap();
        assert_eq!(parsed, ArtifactCoordinate::of("org.example", "widget"));
    }

    #[test]
    fn rejects_wrong_segment_counts() {
        assert!(matches!(
            "widget".parse::<ArtifactCoordinate>(),
            Err(DomainError::InvalidCoordinate { .. })
        ));
        assert!("a:b:c:d:e".parse::<ArtifactCoordinate>().is_err());
    }

    #[test]
    fn serializes_with_maven_field_names() {
        let coordinate = ArtifactCoordinate::of("g", "a");
        let json = serde_json::to_value(&coordinate).unwrap();
        assert_eq!(json["groupId"], "g");
        assert_eq!(json["artifactId"], "a");
        assert!(json["classifier"].is_null());
        assert!(json["type"].is_null());
    }
}
