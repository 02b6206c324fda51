use crate::domain::Property;
use crate::errors::ServerError;
use rust_xlsxwriter::{Format, Workbook};

const HEADERS: [&str; 11] = [
    "ID",
    "Title",
    "Address",
    "City",
    "State",
    "Type",
    "Status",
    "Beds",
    "Baths",
    "Price",
    "Area (m²)",
];

/// Writes the given (already filtered) properties to an xlsx workbook in memory.
pub fn properties_workbook(properties: &[Property]) -> Result<Vec<u8>, ServerError> {
    let xlsx_err = |what: &str, e: rust_xlsxwriter::XlsxError| {
        ServerError::XlsxError(format!("Failed to write {what}: {e}"))
    };

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();
    let money = Format::new().set_num_format("#,##0.00");

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| xlsx_err(*header, e))?;
    }

    for (i, p) in properties.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet.write_string(r, 0, &p.id).map_err(|e| xlsx_err("id", e))?;
        worksheet.write_string(r, 1, &p.title).map_err(|e| xlsx_err("title", e))?;
        worksheet.write_string(r, 2, &p.address).map_err(|e| xlsx_err("address", e))?;
        worksheet.write_string(r, 3, &p.city).map_err(|e| xlsx_err("city", e))?;
        worksheet.write_string(r, 4, &p.state).map_err(|e| xlsx_err("state", e))?;
        worksheet
            .write_string(r, 5, p.kind.label())
            .map_err(|e| xlsx_err("type", e))?;
        worksheet
            .write_string(r, 6, p.status.label())
            .map_err(|e| xlsx_err("status", e))?;
        worksheet
            .write_number(r, 7, f64::from(p.bedrooms))
            .map_err(|e| xlsx_err("bedrooms", e))?;
        worksheet
            .write_number(r, 8, f64::from(p.bathrooms))
            .map_err(|e| xlsx_err("bathrooms", e))?;
        worksheet
            .write_number_with_format(r, 9, p.price, &money)
            .map_err(|e| xlsx_err("price", e))?;

        if let Some(area) = p.area_m2 {
            worksheet
                .write_number(r, 10, area)
                .map_err(|e| xlsx_err("area", e))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}
