//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    #[serde(rename = "en-US")]
    EnUS,
    /// Chinese (Simplified)
    #[serde(rename = "zh-CN")]
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Language key stored on accounts
    pub fn lang_key(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::ZhCN => "zh",
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // Screens
    map.insert("users-title", ("User Management", "用户管理"));
    map.insert("users-create", ("Create User", "创建用户"));
    map.insert("profile-title", ("Profile", "个人资料"));

    // Users table columns
    map.insert("col-login", ("Login / Email", "登录名 / 邮箱"));
    map.insert("col-id", ("ID", "ID"));
    map.insert("col-authorities", ("Authorities", "权限"));
    map.insert("col-created", ("Created by", "创建者"));
    map.insert("col-last-modified", ("Modified by", "修改者"));
    map.insert("col-status", ("Status", "状态"));

    // User status
    map.insert("status-activated", ("Activated", "已激活"));
    map.insert("status-deactivated", ("Deactivated", "已停用"));

    // Menu
    map.insert("menu-edit", ("Edit", "编辑"));
    map.insert("menu-activate", ("Activate Account", "激活账户"));
    map.insert("menu-deactivate", ("Deactivate Account", "停用账户"));
    map.insert("menu-delete", ("Delete", "删除"));
    map.insert("menu-confirm", ("Confirm", "确认"));
    map.insert("menu-cancel", ("Cancel", "取消"));
    map.insert("menu-are-you-sure", ("Are you sure?", "确定吗？"));

    // Toasts
    map.insert("toast-activated-title", ("Account Activated", "账户已激活"));
    map.insert(
        "toast-activated-desc",
        ("Account \"{login}\" activated with success", "账户 \"{login}\" 激活成功"),
    );
    map.insert("toast-deactivated-title", ("Account Deactivated", "账户已停用"));
    map.insert(
        "toast-deactivated-desc",
        ("Account \"{login}\" deactivated with success", "账户 \"{login}\" 停用成功"),
    );
    map.insert("toast-activation-failed-title", ("Activation Failed", "激活失败"));
    map.insert(
        "toast-activation-failed-desc",
        ("Fail to activate \"{login}\" account", "无法激活账户 \"{login}\""),
    );
    map.insert("toast-deactivation-failed-title", ("Deactivation Failed", "停用失败"));
    map.insert(
        "toast-deactivation-failed-desc",
        ("Fail to deactivate \"{login}\" account", "无法停用账户 \"{login}\""),
    );
    map.insert("toast-deleted-title", ("Account Deleted", "账户已删除"));
    map.insert("toast-deleted-desc", ("Account deleted with success", "账户删除成功"));
    map.insert("toast-deletion-failed-title", ("Deletion Failed", "删除失败"));
    map.insert(
        "toast-deletion-failed-desc",
        ("Fail to delete \"{login}\" account", "无法删除账户 \"{login}\""),
    );
    map.insert("toast-update-success", ("Updated with success", "更新成功"));
    map.insert("toast-update-failed", ("Update failed", "更新失败"));

    // Profile form
    map.insert("field-first-name", ("First Name", "名"));
    map.insert("field-last-name", ("Last Name", "姓"));
    map.insert("field-email", ("Email", "邮箱"));
    map.insert("field-language", ("Language", "语言"));
    map.insert("field-required", ("This field is required", "此字段为必填项"));
    map.insert("field-invalid-email", ("Invalid email address", "邮箱地址无效"));
    map.insert("field-invalid-option", ("Invalid option", "无效选项"));
    map.insert("action-save", ("Save", "保存"));

    // Pagination
    map.insert(
        "pagination-info",
        ("Showing {from} to {to} of {total}", "显示第 {from} 到 {to} 条，共 {total} 条"),
    );

    // Table
    map.insert("table-no-data", ("No data", "无数据"));
    map.insert("table-loading", ("Loading...", "加载中..."));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> Cow<'static, str> {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => Cow::Borrowed(en),
            Locale::ZhCN => Cow::Borrowed(zh),
        }
    } else {
        // Fallback: return the key itself
        Cow::Owned(key.to_string())
    }
}

/// Translate a key and substitute `{name}` placeholders
pub fn t_args(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    let mut text = t(locale, key).into_owned();
    for (name, value) in args {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    text
}
