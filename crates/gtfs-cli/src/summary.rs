use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use gtfs_model::{Notice, NoticeKey, Severity};
use gtfs_validate::ValidationReport;

const ENTITY_KEYS: [NoticeKey; 3] = [
    NoticeKey::CompositeKeyFirstValue,
    NoticeKey::CompositeKeySecondValue,
    NoticeKey::CompositeKeyThirdValue,
];

pub fn print_summary(report: &ValidationReport) {
    println!("{}", render_summary(report));
}

/// Per-code counts followed by one row per notice.
pub fn render_summary(report: &ValidationReport) -> String {
    let mut out = String::new();

    let mut counts = Table::new();
    counts.set_header(vec![
        header_cell("Code"),
        header_cell("Severity"),
        header_cell("Description"),
        header_cell("Notices"),
    ]);
    apply_table_style(&mut counts);
    align_column(&mut counts, 3, CellAlignment::Right);
    for (code, count) in report.count_by_code() {
        counts.add_row(vec![
            Cell::new(code),
            severity_cell(code.severity()),
            Cell::new(code.title()),
            Cell::new(count),
        ]);
    }
    counts.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} error(s), {} warning(s)",
            report.error_count(),
            report.warning_count()
        )),
        Cell::new(""),
        Cell::new(report.len()).add_attribute(Attribute::Bold),
    ]);
    out.push_str(&counts.to_string());

    if report.is_empty() {
        out.push_str("\nNo notices.");
        return out;
    }

    let mut notices = Table::new();
    notices.set_header(vec![
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("File"),
        header_cell("Entity"),
        header_cell("Field"),
        header_cell("Details"),
    ]);
    apply_table_style(&mut notices);
    for notice in report.sorted_by_severity() {
        notices.add_row(vec![
            severity_cell(notice.severity()),
            Cell::new(notice.code()),
            Cell::new(notice.filename()),
            Cell::new(entity_label(notice)),
            Cell::new(field_or_dash(notice, NoticeKey::FieldName)),
            Cell::new(details(notice)),
        ]);
    }
    out.push_str("\n\nNotices:\n");
    out.push_str(&notices.to_string());
    out
}

/// Composite key values joined in slot order, e.g. `Metro / https://… / en`.
fn entity_label(notice: &Notice) -> String {
    let values: Vec<String> = ENTITY_KEYS
        .iter()
        .filter_map(|key| notice.get(*key))
        .map(ToString::to_string)
        .collect();
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(" / ")
    }
}

fn details(notice: &Notice) -> String {
    notice
        .fields()
        .filter(|(key, _)| {
            !ENTITY_KEYS.contains(key)
                && !matches!(
                    key,
                    NoticeKey::FieldName
                        | NoticeKey::CompositeKeyFirstPart
                        | NoticeKey::CompositeKeySecondPart
                        | NoticeKey::CompositeKeyThirdPart
                )
        })
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn field_or_dash(notice: &Notice, key: NoticeKey) -> String {
    notice
        .get(key)
        .map_or_else(|| "-".to_string(), ToString::to_string)
}

fn severity_cell(severity: Severity) -> Cell {
    let color = match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::Blue,
    };
    Cell::new(severity.label())
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
