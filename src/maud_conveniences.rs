use maud::{Markup, Render, html};

pub struct TableRow<const N: usize> {
    pub id: String,
    pub cells: [Markup; N],
}

pub fn render_table<const N: usize>(titles: [&'static str; N], rows: Vec<TableRow<N>>) -> Markup {
    html! {
        div class="overflow-x-auto" {
            table class="min-w-full bg-gray-800 rounded shadow-md" {
                thead class="bg-gray-700" {
                    tr {
                        @for title in titles {
                            th class="py-2 px-4 text-left text-sm font-semibold text-gray-300" {(title)}
                        }
                    }
                }
                tbody {
                    @for row in rows {
                        tr id={"student-" (row.id)} class="hover:bg-gray-700 even:bg-gray-800/50" {
                            @for col in row.cells {
                                td class="py-2 px-4 border-b border-gray-600 text-sm text-gray-200" {(col)}
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-4xl font-semibold mb-6 text-center" {(s)}
    }
}

/// Renders `None` as nothing, so absent values become empty cells.
pub fn optional(s: Option<&str>) -> Markup {
    html! {
        @if let Some(s) = s {
            (s)
        }
    }
}
