use crate::core::logic::{Core, RecordSummary};
use crate::db::pool::DbPool;
use crate::db::queries::load_records;
use crate::errors::AppResult;
use crate::models::settings::Settings;
use crate::utils::colors::{RESET, color_for_hours};
use crate::utils::describe_day_type;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hours;
use chrono::{Datelike, NaiveDate};

pub struct ListLogic;

impl ListLogic {
    pub fn print(
        pool: &mut DbPool,
        settings: &Settings,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<()> {
        let records = load_records(&pool.conn, bounds)?;

        if records.is_empty() {
            match bounds {
                Some((from, to)) => println!("No records between {} and {}.", from, to),
                None => println!("No records found."),
            }
            return Ok(());
        }

        let rows = Core::summarize(&records, settings);
        print!("{}", render_table(&rows));

        let total: f64 = rows.iter().map(|r| r.net_hours).sum();
        println!("\nTotal net hours: {}", format_hours(total));
        Ok(())
    }
}

fn render_table(rows: &[RecordSummary]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("DATE", 10),
        Column::new("DAY", 4),
        Column::new("TYPE", 9),
        Column::new("START", 5),
        Column::new("END", 5),
        Column::new("NET", 6),
        Column::new("NOTE", 20),
    ]);

    for r in rows {
        let rec = &r.record;
        let label = describe_day_type(rec.day_type.code());
        table.add_row(vec![
            rec.id.to_string(),
            rec.date_str(),
            rec.date.weekday().to_string(),
            label,
            rec.start.clone(),
            rec.end.clone(),
            format_hours(r.net_hours),
            rec.note.clone(),
        ]);
    }

    // color whole lines so ANSI codes never skew the column widths
    let rendered = table.render();
    let mut out = String::new();
    for (i, line) in rendered.lines().enumerate() {
        match i.checked_sub(2).and_then(|idx| rows.get(idx)) {
            Some(r) => {
                let color = color_for_hours(r.net_hours);
                out.push_str(&format!("{color}{line}{RESET}\n"));
            }
            None => {
                out.push_str(line);
                out.push('\n');
            }
        }
    }
    out
}
