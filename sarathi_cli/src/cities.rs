use comfy_table::{Table, presets::UTF8_FULL};
use sarathi_planner::catalog::catalog::Catalog;

pub fn run(catalog: &Catalog) -> Result<(), anyhow::Error> {
    println!("{}", cities_table(catalog));

    Ok(())
}

fn cities_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["City", "Metro", "Landmarks", "Facilities"]);

    for city in catalog.cities() {
        let name = city.name();
        table.add_row(vec![
            name.to_string(),
            if catalog.has_metro(name) { "yes" } else { "no" }.to_string(),
            city.landmarks.len().to_string(),
            catalog.infrastructure_for(name).names().count().to_string(),
        ]);
    }

    table
}
