use anyhow::{Context, Result};
use sheetread_core::{CellValue, Orientation, named_ranges, read, sheet_names};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <file.xlsx|file.ods> [sheet_name] [A1:C5]", args[0]);
        return Ok(());
    }
    let path = &args[1];

    let names = sheet_names(path).with_context(|| format!("Failed to open {}", path))?;
    println!("Sheets: {}", names.join(", "));

    for range in named_ranges(path, None)? {
        println!("  {} -> {}", range, range.range_addresses().join(", "));
    }

    let Some(sheet) = args.get(2).or_else(|| names.first()) else {
        return Ok(());
    };
    let address = args.get(3).map(String::as_str);

    for range in named_ranges(path, Some(sheet.as_str()))? {
        println!("  [{}] {} -> {}", sheet, range, range.range_addresses().join(", "));
    }

    let rows = read(path, sheet, Orientation::ByRow, address)
        .with_context(|| format!("Failed to read sheet '{}'", sheet))?;
    for row in rows {
        let line: Vec<String> = row.iter().map(render).collect();
        println!("{}", line.join("\t"));
    }

    Ok(())
}

fn render(value: &CellValue) -> String {
    match value {
        CellValue::Empty => String::new(),
        CellValue::Int(i) => i.to_string(),
        CellValue::Number(n) | CellValue::Duration(n) => n.to_string(),
        CellValue::DateTime(dt) => dt.to_string(),
        CellValue::Text(s) | CellValue::DateTimeIso(s) | CellValue::DurationIso(s) => s.clone(),
        CellValue::Boolean(b) => b.to_string(),
        CellValue::Error(e) => e.clone(),
    }
}
