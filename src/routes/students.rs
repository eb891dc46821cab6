use crate::{
    config::date_locale::{DateLocaleConfig, ShortDates},
    data::{roster::Roster, student::Student},
    error::RollcallResult,
    maud_conveniences::{TableRow, optional, render_table, title},
    search::visible_students,
    state::RollcallState,
};
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
};
use maud::{Markup, html};
use serde::Deserialize;
use uuid::Uuid;

const STUDENT_COLUMNS: [&str; 14] = [
    "ID",
    "First Name",
    "Last Name",
    "Gender",
    "Date of Birth",
    "Blood Group",
    "Parent Contact",
    "Parent Email",
    "Current Address",
    "Created At",
    "Updated At",
    "City",
    "State",
    "Apartment Name",
];

pub async fn get_students_page(State(state): State<RollcallState>) -> RollcallResult<Markup> {
    let dates = state.config().date_locale_config();

    let page = state
        .mount(|mount, roster| render_students_page(mount, roster, &dates))
        .await?;
    Ok(state.render(page))
}

#[derive(Deserialize)]
pub struct TableQuery {
    pub mount: Uuid,
    #[serde(default)]
    pub q: String,
}

pub async fn internal_get_student_table(
    State(state): State<RollcallState>,
    Query(TableQuery { mount, q }): Query<TableQuery>,
) -> RollcallResult<Markup> {
    let dates = state.config().date_locale_config();
    state
        .with_roster(mount, |roster| render_student_table(&roster.students, &q, &dates))
        .await?
}

#[derive(Deserialize)]
pub struct SelectSchoolForm {
    pub mount: Uuid,
    #[serde(default)]
    pub school: String,
}

///records the pick, but doesn't (yet?) narrow the table down
pub async fn internal_post_select_school(
    State(state): State<RollcallState>,
    Form(SelectSchoolForm { mount, school }): Form<SelectSchoolForm>,
) -> RollcallResult<StatusCode> {
    let school = Some(school).filter(|s| !s.is_empty());
    debug!(?mount, ?school, "School selected");

    state
        .with_roster_mut(mount, |roster| roster.selected_school = school)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn internal_post_add_student() -> StatusCode {
    info!("Add Student button clicked");
    StatusCode::NO_CONTENT
}

fn render_students_page(
    mount: Uuid,
    roster: &Roster,
    dates: &DateLocaleConfig,
) -> RollcallResult<Markup> {
    let mount_vals = html! { "{\"mount\": \"" (mount) "\"}" };
    let table = render_student_table(&roster.students, "", dates)?;

    Ok(html! {
        div class="container mx-auto p-4" {
            (title("Students"))

            div class="mb-4 flex justify-between items-center" {
                div class="flex space-x-4" {
                    select name="school" hx-post="/internal/students/select_school" hx-trigger="change" hx-vals=(mount_vals) hx-swap="none" class="px-4 py-2 rounded-lg bg-gray-700 border border-gray-600 focus:outline-none focus:ring-2 focus:ring-blue-600" {
                        option value="" selected[roster.selected_school.is_none()] {"Select school"}
                        @for school in &roster.schools {
                            @let id = school.id.to_string();
                            option value=(id) selected[roster.selected_school.as_deref() == Some(id.as_str())] {
                                (optional(school.attributes.name.as_deref()))
                            }
                        }
                    }

                    input type="search" name="q" placeholder="Search..." hx-get="/internal/students/table" hx-trigger="input changed delay:300ms, search" hx-target="#student_table" hx-vals=(mount_vals) class="px-4 py-2 rounded-lg bg-gray-700 border border-gray-600 focus:outline-none focus:ring-2 focus:ring-blue-600";
                }

                button hx-post="/internal/students/add" hx-swap="none" class="px-4 py-2 bg-blue-600 hover:bg-blue-700 font-bold rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-600" {
                    "Add Student"
                }
            }

            div id="student_table" {
                (table)
            }
        }
    })
}

fn render_student_table(
    students: &[Student],
    query: &str,
    dates: &DateLocaleConfig,
) -> RollcallResult<Markup> {
    let visible = visible_students(students, query);
    let dates = dates.short_dates()?;

    Ok(html! {
        div class="mb-4 text-gray-300" {
            "Total Students: " (visible.len())
        }
        (render_table(
            STUDENT_COLUMNS,
            visible.into_iter().map(|student| student_row(student, &dates)).collect(),
        ))
    })
}

fn student_row(student: &Student, dates: &ShortDates) -> TableRow<14> {
    let a = &student.attributes;
    let id = student.id.to_string();
    let date = |raw: Option<&str>| optional(raw.and_then(|raw| dates.format_str(raw)).as_deref());

    TableRow {
        cells: [
            html! {(id)},
            optional(a.first_name.as_deref()),
            optional(a.last_name.as_deref()),
            optional(a.gender.as_deref()),
            optional(a.dob.as_deref()),
            optional(a.blood_group.as_deref()),
            optional(a.parent_contact_no.as_deref()),
            optional(a.parent_email_id.as_deref()),
            optional(a.current_address.as_deref()),
            date(a.created_at.as_deref()),
            date(a.updated_at.as_deref()),
            optional(a.city.as_deref()),
            optional(a.state.as_deref()),
            optional(a.apartment_name.as_deref()),
        ],
        id,
    }
}
