use serde::{Deserialize, Serialize};

/// Opaque reference to an externally supplied image. The core never inspects
/// it; the picker produces it and the viewer hands it back for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Singleton driver identity shown on the driver screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverProfile {
    pub full_name: String,
    pub taxpayer_id: String,
    pub birth_date: String,
    pub pix_key: String,
    pub qr_code: Option<ImageRef>,
}

impl Default for DriverProfile {
    fn default() -> Self {
        // Seed values shipped with the original app.
        Self {
            full_name: "João Silva".into(),
            taxpayer_id: "123.456.789-00".into(),
            birth_date: "01/01/1990".into(),
            pix_key: "joao.silva@example.com".into(),
            qr_code: None,
        }
    }
}

/// Working copy of the profile while the editor overlay is open. Cancel
/// discards it; save validates and commits the whole draft atomically.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileDraft {
    pub full_name: String,
    pub taxpayer_id: String,
    pub birth_date: String,
    pub pix_key: String,
    pub qr_code: Option<ImageRef>,
}

impl ProfileDraft {
    pub fn from_profile(profile: &DriverProfile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            taxpayer_id: profile.taxpayer_id.clone(),
            birth_date: profile.birth_date.clone(),
            pix_key: profile.pix_key.clone(),
            qr_code: profile.qr_code.clone(),
        }
    }

    /// All four text fields are required on save.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.full_name.is_empty() {
            Some("name")
        } else if self.taxpayer_id.is_empty() {
            Some("taxpayer id")
        } else if self.birth_date.is_empty() {
            Some("birth date")
        } else if self.pix_key.is_empty() {
            Some("PIX key")
        } else {
            None
        }
    }

    pub fn apply_to(&self, profile: &mut DriverProfile) {
        profile.full_name = self.full_name.clone();
        profile.taxpayer_id = self.taxpayer_id.clone();
        profile.birth_date = self.birth_date.clone();
        profile.pix_key = self.pix_key.clone();
        profile.qr_code = self.qr_code.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_carries_seed_values() {
        let profile = DriverProfile::default();
        assert_eq!(profile.full_name, "João Silva");
        assert!(profile.qr_code.is_none());
    }

    #[test]
    fn draft_round_trips_through_apply() {
        let mut profile = DriverProfile::default();
        let mut draft = ProfileDraft::from_profile(&profile);
        draft.pix_key = "maria@example.com".into();
        draft.qr_code = Some(ImageRef::new("file:///qr.png"));
        assert_eq!(draft.missing_field(), None);
        draft.apply_to(&mut profile);
        assert_eq!(profile.pix_key, "maria@example.com");
        assert_eq!(profile.qr_code, Some(ImageRef::new("file:///qr.png")));
    }

    #[test]
    fn empty_fields_block_save() {
        let mut draft = ProfileDraft::from_profile(&DriverProfile::default());
        draft.birth_date.clear();
        assert_eq!(draft.missing_field(), Some("birth date"));
    }
}
