//! Excel export functionality.

use crate::models::employee::Employee;
use crate::models::training::TrainingMaterial;
use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet, XlsxError};
use std::path::{Path, PathBuf};

/// Bold white-on-blue header row.
fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin)
}

/// Write the header row, size the columns, and freeze the top row.
fn write_header(worksheet: &mut Worksheet, columns: &[(&str, f64)]) -> Result<(), XlsxError> {
    let format = header_format();
    for (col, (title, width)) in columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &format)?;
        worksheet.set_column_width(col as u16, *width)?;
    }
    worksheet.set_freeze_panes(1, 0)?;
    Ok(())
}

/// Export the employee roster to an Excel file.
pub fn export_employees_to_excel(employees: &[Employee], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Employees")?;

    let columns = [
        ("Name", 25.0),
        ("Email", 32.0),
        ("Position", 25.0),
        ("Department", 18.0),
        ("Status", 10.0),
        ("Join Date", 12.0),
    ];
    write_header(worksheet, &columns)?;

    for (idx, emp) in employees.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_string(row, 0, &emp.name)?;
        worksheet.write_string(row, 1, &emp.email)?;
        worksheet.write_string(row, 2, &emp.position)?;
        worksheet.write_string(row, 3, emp.department.map(|d| d.label()).unwrap_or(""))?;
        worksheet.write_string(row, 4, emp.status.label())?;
        worksheet.write_string(row, 5, emp.join_date.format("%Y-%m-%d").to_string())?;
    }

    if !employees.is_empty() {
        worksheet.autofilter(0, 0, employees.len() as u32, (columns.len() - 1) as u16)?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Export the training catalog to an Excel file.
pub fn export_training_to_excel(materials: &[TrainingMaterial], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Training Content")?;

    let columns = [
        ("Title", 35.0),
        ("Type", 10.0),
        ("Category", 15.0),
        ("Duration", 10.0),
        ("Completion %", 13.0),
        ("Uploaded", 12.0),
        ("Description", 60.0),
    ];
    write_header(worksheet, &columns)?;

    for (idx, material) in materials.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_string(row, 0, &material.title)?;
        worksheet.write_string(row, 1, material.material_type.label())?;
        worksheet.write_string(row, 2, material.category_str())?;
        worksheet.write_string(row, 3, &material.duration)?;
        worksheet.write_number(row, 4, f64::from(material.completion_rate))?;
        worksheet.write_string(row, 5, material.upload_date.format("%Y-%m-%d").to_string())?;
        worksheet.write_string(row, 6, &material.description)?;
    }

    if !materials.is_empty() {
        worksheet.autofilter(0, 0, materials.len() as u32, (columns.len() - 1) as u16)?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Open save file dialog and return selected path.
pub fn show_save_dialog(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter("Excel Files", &["xlsx"])
        .save_file()
}

/// Generate default filename for export.
pub fn generate_export_filename(prefix: &str) -> String {
    let now = Local::now();
    format!("{prefix}_{ts}.xlsx", ts = now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SampleData;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ems-pro-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_generate_export_filename() {
        let name = generate_export_filename("employees");
        assert!(name.starts_with("employees_"));
        assert!(name.ends_with(".xlsx"));
    }

    #[test]
    fn test_export_employees_writes_file() {
        let data = SampleData::load().unwrap();
        let path = temp_path("employees.xlsx");
        export_employees_to_excel(&data.employees, &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_export_training_writes_file() {
        let data = SampleData::load().unwrap();
        let path = temp_path("training.xlsx");
        export_training_to_excel(&data.training, &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_export_empty_roster() {
        let path = temp_path("empty.xlsx");
        export_employees_to_excel(&[], &path).unwrap();
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}
