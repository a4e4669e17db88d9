//! Profile Page
//!
//! Form declaration of the profile screen and the mapping between the form
//! values and the account.

use crate::app::navigation::Route;
use crate::components::primitives::form_group::FormGroup;
use crate::domain::account::Account;
use crate::form::{FieldSpec, Form, FormValues, SelectOption, Validation, is_email};
use crate::i18n::{Locale, t};

pub const FIELD_FIRST_NAME: &str = "firstName";
pub const FIELD_LAST_NAME: &str = "lastName";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_LANG_KEY: &str = "langKey";

/// Languages offered by the language select
pub fn languages() -> Vec<SelectOption> {
    vec![SelectOption::new("English", "en")]
}

/// The profile form, without values
pub fn profile_form(locale: Locale) -> Form {
    let required = t(locale, "field-required");
    Form::new([
        FieldSpec::input(FIELD_FIRST_NAME, t(locale, "field-first-name")).required(required.clone()),
        FieldSpec::input(FIELD_LAST_NAME, t(locale, "field-last-name")).required(required.clone()),
        FieldSpec::input(FIELD_EMAIL, t(locale, "field-email"))
            .required(required)
            .validation(Validation::new(is_email, t(locale, "field-invalid-email"))),
        FieldSpec::select(FIELD_LANG_KEY, t(locale, "field-language"), languages())
            .invalid_option_message(t(locale, "field-invalid-option")),
    ])
}

/// Initial form values for an account
pub fn account_values(account: &Account) -> [(&'static str, String); 4] {
    [
        (FIELD_FIRST_NAME, account.first_name.clone()),
        (FIELD_LAST_NAME, account.last_name.clone()),
        (FIELD_EMAIL, account.email.clone()),
        (FIELD_LANG_KEY, account.lang_key.clone()),
    ]
}

/// Account with the submitted values applied over it
pub fn apply_values(account: &Account, values: &FormValues) -> Account {
    let value = |name: &str, current: &str| {
        values
            .get(name)
            .map_or_else(|| current.to_string(), |v| v.trim().to_string())
    };
    Account {
        first_name: value(FIELD_FIRST_NAME, &account.first_name),
        last_name: value(FIELD_LAST_NAME, &account.last_name),
        email: value(FIELD_EMAIL, &account.email),
        lang_key: value(FIELD_LANG_KEY, &account.lang_key),
        ..account.clone()
    }
}

/// Profile screen view model
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePage {
    pub title: String,
    pub login: String,
    pub fields: Vec<(FormGroup, String)>,
    pub save_label: String,
    pub is_saving: bool,
}

impl ProfilePage {
    pub fn build(account: &Account, form: &Form, is_saving: bool, locale: Locale) -> Self {
        let fields = [FIELD_FIRST_NAME, FIELD_LAST_NAME, FIELD_EMAIL, FIELD_LANG_KEY]
            .into_iter()
            .filter_map(|name| {
                let group = form.field_group(name)?;
                Some((group, form.value(name).unwrap_or_default().to_string()))
            })
            .collect();
        Self {
            title: t(locale, Route::Profile.title_key()).into_owned(),
            login: account.login.clone(),
            fields,
            save_label: t(locale, "action-save").into_owned(),
            is_saving,
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = vec![format!("{} ({})", self.title, self.login)];
        for (group, value) in &self.fields {
            let label = group.label.as_deref().unwrap_or(&group.id);
            let marker = if group.is_required { "*" } else { "" };
            out.push(format!("{label}{marker}: {value}"));
            if let Some(error) = group.visible_error() {
                out.push(format!("  ! {error}"));
            }
        }
        out.push(format!("[{}]", self.save_label));
        out.join("\n")
    }
}
