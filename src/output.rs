//! Output formatting for terminal display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output of single
//! records.

use crate::{Animal, AnimalType, Organization};

const NA: &str = "N/A";

/// Trait for human-readable key-value output.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for AnimalType {
    fn pretty_print(&self) -> String {
        let name = self.name.as_deref().unwrap_or(NA);
        let header = format!("Type: {name}");
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![header, divider];

        if let Some(ref coats) = self.coats {
            lines.push(format!("Coats:          {}", coats.join(", ")));
        }

        if let Some(ref genders) = self.genders {
            lines.push(format!("Genders:        {}", genders.join(", ")));
        }

        if let Some(ref colors) = self.colors {
            lines.push(format!("Colors:         {}", colors.join(", ")));
        }

        lines.push(format!("Self Link:      {}", self.self_href().unwrap_or(NA)));

        lines.join("\n")
    }
}

impl PrettyPrint for Animal {
    fn pretty_print(&self) -> String {
        let id = self.id.map(|id| id.to_string()).unwrap_or_else(|| NA.to_string());
        let header = format!("Animal #{id}");
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![
            header,
            divider,
            format!("Name:           {}", self.name.as_deref().unwrap_or(NA)),
            format!("Species:        {}", self.species.as_deref().unwrap_or(NA)),
        ];

        if let Some(ref breeds) = self.breeds {
            if let Some(ref primary) = breeds.primary {
                lines.push(format!("Breed:          {primary}"));
            }
        }

        let profile: Vec<&str> = [&self.age, &self.gender, &self.size, &self.coat]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .collect();
        if !profile.is_empty() {
            lines.push(format!("Profile:        {}", profile.join(", ")));
        }

        if let Some(ref status) = self.status {
            lines.push(format!("Status:         {status}"));
        }

        for photo in self.medium_photos() {
            lines.push(format!("Photo:          {photo}"));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Organization {
    fn pretty_print(&self) -> String {
        let header = format!("Organization: {}", self.id.as_deref().unwrap_or(NA));
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![
            header,
            divider,
            format!("Name:           {}", self.name.as_deref().unwrap_or(NA)),
        ];

        if let Some(locality) = self.address.as_ref().and_then(|a| a.locality()) {
            lines.push(format!("Location:       {locality}"));
        }

        if let Some(ref email) = self.email {
            lines.push(format!("Email:          {email}"));
        }

        if let Some(ref phone) = self.phone {
            lines.push(format!("Phone:          {phone}"));
        }

        if let Some(ref website) = self.website {
            lines.push(format!("Website:        {website}"));
        }

        lines.join("\n")
    }
}
