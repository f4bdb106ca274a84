use anyhow::Result;

fn main() -> Result<()> {
    let mut book = umya_spreadsheet::new_file();

    let sheet = book.get_active_sheet_mut();

    // Row 1 is a title line and row 2 the real column names, which is why
    // the inspector prints rows without assuming a header.
    sheet.get_cell_mut("A1").set_value("Performans Verileri");
    for (col, name) in ["Oyuncu", "Mevki", "Yaş", "Mesafe (km)", "Sprint"]
        .iter()
        .enumerate()
    {
        sheet.get_cell_mut((col as u32 + 1, 2)).set_value(*name);
    }

    let players: [(&str, &str, f64, f64, f64); 6] = [
        ("Ali Yılmaz", "Forvet", 23.0, 10.4, 31.0),
        ("Burak Demir", "Orta Saha", 27.0, 11.9, 24.0),
        ("Can Kaya", "Defans", 30.0, 9.7, 12.0),
        ("Deniz Şahin", "Kaleci", 25.0, 5.1, 2.0),
        ("Emre Çelik", "Kanat", 21.0, 10.8, 35.0),
        ("Furkan Aydın", "Defans", 28.0, 10.1, 15.0),
    ];
    for (i, (name, position, age, distance, sprints)) in players.iter().enumerate() {
        let row = i as u32 + 3;
        sheet.get_cell_mut((1, row)).set_value(*name);
        sheet.get_cell_mut((2, row)).set_value(*position);
        sheet.get_cell_mut((3, row)).set_value_number(*age);
        sheet.get_cell_mut((4, row)).set_value_number(*distance);
        sheet.get_cell_mut((5, row)).set_value_number(*sprints);
    }

    umya_spreadsheet::writer::xlsx::write(&book, xlhead::DEFAULT_FILE_PATH)?;
    println!("Wrote {}", xlhead::DEFAULT_FILE_PATH);
    Ok(())
}
