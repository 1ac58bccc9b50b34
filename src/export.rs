//! Excel export functionality.

use crate::models::EmployeeRecord;
use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};
use std::path::Path;

/// Generate default filename for export.
pub fn generate_export_filename(prefix: &str) -> String {
    let now = Local::now();
    format!("{prefix}_{ts}.xlsx", ts = now.format("%Y%m%d_%H%M%S"))
}

/// Export employees, in the given order, to an Excel file.
pub fn export_employees_to_excel(employees: &[&EmployeeRecord], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Employees")?;

    // Header format
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    let headers = [
        "First Name",
        "Last Name",
        "Email",
        "Title",
        "Department",
        "Role",
        "Squads",
        "Date Started",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    let widths = [15, 18, 30, 25, 20, 12, 30, 14];
    for (col, width) in widths.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    for (idx, emp) in employees.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_string(row, 0, &emp.first_name)?;
        worksheet.write_string(row, 1, &emp.last_name)?;
        worksheet.write_string(row, 2, &emp.email)?;
        worksheet.write_string(row, 3, emp.title.as_deref().unwrap_or(""))?;
        worksheet.write_string(row, 4, emp.department.as_deref().unwrap_or(""))?;
        worksheet.write_string(row, 5, emp.role.as_str())?;
        worksheet.write_string(row, 6, emp.squad_names().collect::<Vec<_>>().join(", "))?;

        // Start dates are shown in local time
        let started = emp
            .date_started
            .map(|d| d.with_timezone(&Local).format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        worksheet.write_string(row, 7, started)?;
    }

    if !employees.is_empty() {
        let last_row = employees.len() as u32;
        worksheet.autofilter(0, 0, last_row, (headers.len() - 1) as u16)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(())
}
