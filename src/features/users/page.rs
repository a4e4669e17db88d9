//! Users Page
//!
//! View model of the user management screen: the column declarations, one
//! row per user with its actions menu, and the pagination footer.

use chrono::Utc;
use hashlink::LinkedHashMap;

use super::actions::UserActions;
use super::controller::UsersController;
use crate::app::navigation::Route;
use crate::components::composite::data_list::{
    Align, Breakpoint, CellContent, ColumnRegistry, ColumnSpec, ColumnWidth, DataList,
    DataListCell, DataListHeader, DataListLayout, DataListRow, ResolvedCell, Responsive,
};
use crate::components::composite::pagination::Pagination;
use crate::domain::user::User;
use crate::error::Result;
use crate::i18n::{Locale, t};
use crate::services::AdminApi;
use crate::utils::format::{format_ago, format_datetime, truncate};

/// Longest login shown before truncation
const LOGIN_DISPLAY_LEN: usize = 32;

/// "Create User" control, which shrinks to an icon on the smallest screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateButton {
    Icon { label: String, href: String },
    Full { label: String, href: String },
}

impl CreateButton {
    pub fn at(bp: Breakpoint, locale: Locale) -> Self {
        let label = t(locale, "users-create").into_owned();
        let href = Route::UserCreate.path();
        if bp >= Breakpoint::Sm {
            CreateButton::Full { label, href }
        } else {
            CreateButton::Icon { label, href }
        }
    }
}

/// Column declarations of the users list
pub fn user_columns(locale: Locale) -> Result<ColumnRegistry> {
    ColumnRegistry::from_columns([
        ColumnSpec::new("login", t(locale, "col-login")).flex_width(2.0),
        ColumnSpec::new("id", t(locale, "col-id"))
            .rem_width(4.0)
            .visibility(Responsive::from_breakpoint(Breakpoint::Lg)),
        ColumnSpec::new("authorities", t(locale, "col-authorities"))
            .visibility(Responsive::from_breakpoint(Breakpoint::Lg)),
        ColumnSpec::new("created", t(locale, "col-created"))
            .visibility(Responsive::from_breakpoint(Breakpoint::Lg)),
        ColumnSpec::new("lastModified", t(locale, "col-last-modified"))
            .visibility(Responsive::from_breakpoint(Breakpoint::Md)),
        ColumnSpec::new("status", t(locale, "col-status"))
            .responsive_width(
                Responsive::all(ColumnWidth::Rem(2.0)).at(Breakpoint::Md, ColumnWidth::Flex(0.5)),
            )
            .align(Align::Center),
        ColumnSpec::new("actions", "").rem_width(4.0).align(Align::End),
    ])
}

fn audit_lines(by: &str, date: Option<chrono::DateTime<Utc>>, now: &chrono::DateTime<Utc>) -> CellContent {
    let mut lines = vec![by.to_string()];
    if let Some(date) = date {
        lines.push(format_ago(&date, now));
    }
    CellContent::Lines(lines)
}

/// Full audit dates, revealed when the row is expanded
fn audit_panel(user: &User) -> Option<CellContent> {
    let lines: Vec<String> = [
        (&user.created_by, user.created_date),
        (&user.last_modified_by, user.last_modified_date),
    ]
    .into_iter()
    .filter_map(|(by, date)| date.map(|date| format!("{} ({by})", format_datetime(&date))))
    .collect();
    (!lines.is_empty()).then_some(CellContent::Lines(lines))
}

/// One list row for a user
pub fn user_row(user: &User, locale: Locale) -> DataListRow {
    let now = Utc::now();
    let status = if user.activated {
        t(locale, "status-activated")
    } else {
        t(locale, "status-deactivated")
    };

    let mut row = DataListRow::new(user.id.to_string());
    if let Some(panel) = audit_panel(user) {
        row = row.panel(panel);
    }
    let login = DataListCell::new(
        "login",
        CellContent::Lines(vec![truncate(&user.login, LOGIN_DISPLAY_LEN), user.email.clone()]),
    )
    .href(
        Route::UserEdit {
            login: user.login.clone(),
        }
        .path(),
    );

    row.cell(login)
        .cell(DataListCell::new("id", user.id.to_string()))
        .cell(DataListCell::new(
            "authorities",
            CellContent::Badges(user.authorities.clone()),
        ))
        .cell(DataListCell::new(
            "created",
            audit_lines(&user.created_by, user.created_date, &now),
        ))
        .cell(DataListCell::new(
            "lastModified",
            audit_lines(&user.last_modified_by, user.last_modified_date, &now),
        ))
        .cell(DataListCell::new("status", status.into_owned()))
        .cell(DataListCell::new("actions", CellContent::Menu(user.id.to_string())))
}

/// The users screen, ready to be laid out at a breakpoint
#[derive(Debug)]
pub struct UsersPage {
    pub title: String,
    pub create_button: CreateButton,
    pub list: DataList<Pagination>,
    /// Actions menu of each row, keyed by row id
    actions: LinkedHashMap<String, UserActions>,
    locale: Locale,
}

impl UsersPage {
    /// Build the page from the controller's loaded state
    pub fn build<A: AdminApi>(controller: &UsersController<A>, bp: Breakpoint) -> Result<Self> {
        let locale = controller.entities().locale();
        let header = DataListHeader::new(user_columns(locale)?)
            .visibility(Responsive::from_breakpoint(Breakpoint::Md));

        let users = &controller.list().items;
        let mut list = DataList::new(header);
        list.set_rows(users.iter().map(|user| user_row(user, locale)).collect());
        list.set_footer(controller.footer());
        let actions = users
            .iter()
            .map(|user| (user.id.to_string(), controller.actions_for(user)))
            .collect();

        Ok(Self {
            title: t(locale, Route::Users.title_key()).into_owned(),
            create_button: CreateButton::at(bp, locale),
            list,
            actions,
            locale,
        })
    }

    /// Actions menu of a row
    pub fn actions(&self, row_id: &str) -> Option<&UserActions> {
        self.actions.get(row_id)
    }

    pub fn actions_mut(&mut self, row_id: &str) -> Option<&mut UserActions> {
        self.actions.get_mut(row_id)
    }

    /// Menu behind a resolved menu cell
    pub fn cell_menu(&self, cell: &ResolvedCell<'_>) -> Option<&UserActions> {
        match cell.content {
            CellContent::Menu(row_id) => self.actions(row_id),
            _ => None,
        }
    }

    pub fn layout(&self, bp: Breakpoint) -> DataListLayout<'_, Pagination> {
        self.list.layout(bp)
    }

    /// Plain-text rendering of the list at a breakpoint
    pub fn render_text(&self, bp: Breakpoint) -> String {
        let layout = self.layout(bp);
        let mut out = vec![self.title.clone()];

        let join = |cells: Vec<String>| cells.join(" | ");
        if let Some(header) = &layout.header {
            out.push(join(header.visible_cells().map(|c| c.content.to_plain_text()).collect()));
        }
        if layout.rows.is_empty() {
            out.push(t(self.locale, "table-no-data").into_owned());
        }
        for row in &layout.rows {
            out.push(join(row.visible_cells().map(|c| c.content.to_plain_text()).collect()));
        }
        if let Some(footer) = &layout.footer {
            let pagination = footer.content;
            if pagination.is_loading_page {
                out.push(t(self.locale, "table-loading").into_owned());
            }
            out.push(pagination.info_label(self.locale));
        }
        out.join("\n")
    }
}
