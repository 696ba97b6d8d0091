use std::collections::HashSet;

/// Field values from one `POST /generate` form submission.
///
/// Every field is optional on the wire; a missing field stays an empty
/// string and the document builder substitutes its fallback text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeSubmission {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
}

impl ResumeSubmission {
    /// Builds a submission from decoded form pairs. The first value of a
    /// repeated key wins and unknown keys are ignored.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut submission = Self::default();
        let mut seen = HashSet::new();
        for (key, value) in pairs {
            let key = key.as_ref();
            if let Some(field) = submission.field_mut(key) {
                if seen.insert(key.to_string()) {
                    *field = value.into();
                }
            }
        }
        submission
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "full_name" => Some(&mut self.full_name),
            "title" => Some(&mut self.title),
            "email" => Some(&mut self.email),
            "phone" => Some(&mut self.phone),
            "location" => Some(&mut self.location),
            "summary" => Some(&mut self.summary),
            "experience" => Some(&mut self.experience),
            "education" => Some(&mut self.education),
            "skills" => Some(&mut self.skills),
            _ => None,
        }
    }
}
