//! Personal-information form model.
//!
//! DESIGN
//! ======
//! The editor starts from placeholder defaults and overlays whatever the
//! directory returns for the selected id. Validation and field access are
//! keyed by the same `ProfileField` enum the page renders from, so the form
//! layout and the rules cannot drift apart.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::fetch::RequestTicket;
use crate::net::types::DirectoryUser;
use crate::util::validation::{FieldErrors, is_email, is_phone, is_zip, optional};

pub const PROFILE_UPDATED: &str = "Profile updated";
pub const LOAD_FAILED: &str = "Failed to load user";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProfileField {
    FirstName,
    LastName,
    Country,
    City,
    Address,
    Email,
    Phone,
    Birthday,
    Organization,
    Role,
    Department,
    Zip,
}

impl ProfileField {
    /// Render order of the editor grid.
    pub const ALL: [ProfileField; 12] = [
        Self::FirstName,
        Self::LastName,
        Self::Country,
        Self::City,
        Self::Address,
        Self::Email,
        Self::Phone,
        Self::Birthday,
        Self::Organization,
        Self::Role,
        Self::Department,
        Self::Zip,
    ];

    /// Stable key used for DOM ids and error lookup.
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "first-name",
            Self::LastName => "last-name",
            Self::Country => "country",
            Self::City => "city",
            Self::Address => "address",
            Self::Email => "email",
            Self::Phone => "phone-number",
            Self::Birthday => "birthday",
            Self::Organization => "organization",
            Self::Role => "role",
            Self::Department => "department",
            Self::Zip => "zip-code",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Country => "Country",
            Self::City => "City",
            Self::Address => "Address",
            Self::Email => "Email",
            Self::Phone => "Phone Number",
            Self::Birthday => "Birthday",
            Self::Organization => "Organization",
            Self::Role => "Role",
            Self::Department => "Department",
            Self::Zip => "Zip/postal code",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::FirstName => "Bonnie",
            Self::LastName => "Green",
            Self::Country => "United States",
            Self::City => "e.g. San Francisco",
            Self::Address => "e.g. California",
            Self::Email => "example@company.com",
            Self::Phone => "e.g. +(12)3456 789",
            Self::Birthday => "15/08/1990",
            Self::Organization => "Company Name",
            Self::Role => "React Developer",
            Self::Department => "Development",
            Self::Zip => "123456",
        }
    }

    pub fn input_type(self) -> &'static str {
        if self == Self::Email { "email" } else { "text" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub birthday: String,
    pub organization: String,
    pub role: String,
    pub department: String,
    pub zip: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            first_name: "Bonnie".to_owned(),
            last_name: "Green".to_owned(),
            country: "United States".to_owned(),
            city: "San Francisco".to_owned(),
            address: "e.g. California".to_owned(),
            email: "example@company.com".to_owned(),
            phone: String::new(),
            birthday: String::new(),
            organization: "Company Name".to_owned(),
            role: "React Developer".to_owned(),
            department: "Development".to_owned(),
            zip: String::new(),
        }
    }
}

fn overlay(slot: &mut String, value: Option<&String>) {
    if let Some(v) = value {
        slot.clone_from(v);
    }
}

impl ProfileForm {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Country => &self.country,
            ProfileField::City => &self.city,
            ProfileField::Address => &self.address,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Birthday => &self.birthday,
            ProfileField::Organization => &self.organization,
            ProfileField::Role => &self.role,
            ProfileField::Department => &self.department,
            ProfileField::Zip => &self.zip,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::Country => &mut self.country,
            ProfileField::City => &mut self.city,
            ProfileField::Address => &mut self.address,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Birthday => &mut self.birthday,
            ProfileField::Organization => &mut self.organization,
            ProfileField::Role => &mut self.role,
            ProfileField::Department => &mut self.department,
            ProfileField::Zip => &mut self.zip,
        };
        *slot = value;
    }

    /// Overlay directory values onto the current form; absent fields keep
    /// their current value.
    pub fn merge_directory(&mut self, user: &DirectoryUser) {
        overlay(&mut self.first_name, user.first_name.as_ref());
        overlay(&mut self.last_name, user.last_name.as_ref());
        overlay(&mut self.email, user.email.as_ref());
        overlay(&mut self.phone, user.phone.as_ref());
        if let Some(address) = &user.address {
            overlay(&mut self.city, address.city.as_ref());
            overlay(&mut self.country, address.country.as_ref());
            overlay(&mut self.address, address.address.as_ref());
        }
        if let Some(company) = &user.company {
            overlay(&mut self.organization, company.name.as_ref());
            overlay(&mut self.role, company.title.as_ref());
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.first_name.trim().is_empty() {
            errors.insert(ProfileField::FirstName.key(), "Required");
        }
        if self.last_name.trim().is_empty() {
            errors.insert(ProfileField::LastName.key(), "Required");
        }
        if !is_email(&self.email) {
            errors.insert(ProfileField::Email.key(), "Enter a valid email");
        }
        if !optional(&self.phone, is_phone) {
            errors.insert(ProfileField::Phone.key(), "Enter a valid phone");
        }
        if !optional(&self.zip, is_zip) {
            errors.insert(ProfileField::Zip.key(), "Enter a valid zip/postal code");
        }
        errors
    }
}

/// Editor mode and transient feedback around the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub form: ProfileForm,
    pub image: Option<String>,
    pub birth_date: Option<String>,
    pub editing: bool,
    pub loading: bool,
    pub load_error: Option<String>,
    pub errors: FieldErrors,
    pub success: Option<String>,
}

impl ProfileState {
    /// Fresh state for a newly selected id, already loading.
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn toggle_editing(&mut self) {
        self.editing = !self.editing;
    }

    /// Leave edit mode without saving; stale field errors go with it.
    pub fn cancel_editing(&mut self) {
        self.editing = false;
        self.errors.clear();
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.load_error = None;
    }

    pub fn finish_load(&mut self, user: &DirectoryUser) {
        self.form.merge_directory(user);
        self.image.clone_from(&user.image);
        self.birth_date.clone_from(&user.birth_date);
        self.loading = false;
    }

    pub fn fail_load(&mut self) {
        self.loading = false;
        self.load_error = Some(LOAD_FAILED.to_owned());
    }

    /// Validate before saving; true when the save may proceed.
    pub fn begin_save(&mut self) -> bool {
        self.errors = self.form.validate();
        if !self.errors.is_empty() {
            return false;
        }
        self.loading = true;
        true
    }

    pub fn finish_save(&mut self) {
        self.loading = false;
        self.editing = false;
        self.success = Some(PROFILE_UPDATED.to_owned());
    }

    pub fn clear_success(&mut self) {
        self.success = None;
    }

    /// Finish a save started under `ticket`. A newer load or save owns the
    /// state once the ticket is stale, so nothing changes then.
    pub fn settle_save(&mut self, ticket: &RequestTicket) -> bool {
        if !ticket.is_current() {
            return false;
        }
        self.finish_save();
        true
    }

    /// Drop the success banner shown by the save behind `ticket`.
    pub fn expire_success(&mut self, ticket: &RequestTicket) {
        if ticket.is_current() {
            self.clear_success();
        }
    }
}
