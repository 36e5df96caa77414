//! Shared .xlsx fixtures, written in memory with rust_xlsxwriter

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;

#[derive(Clone, Debug)]
pub enum Cell {
    Text(&'static str),
    Number(f64),
    Blank,
}

pub use Cell::{Blank, Number, Text};

/// Standard header: teams in B/D, goals in F/H, half-time in I/K, scorers in L
pub fn header() -> Vec<Cell> {
    vec![
        Text("Datum"),
        Text("Thuisclub"),
        Blank,
        Text("Uitclub"),
        Blank,
        Text("TG"),
        Blank,
        Text("UG"),
        Text("RTH"),
        Blank,
        Text("RUT"),
        Text("Doelpuntenmakers"),
    ]
}

/// A fixture row on the standard layout
pub fn fixture(home: &'static str, away: &'static str, hg: Cell, ag: Cell, ht: (Cell, Cell), scorers: Cell) -> Vec<Cell> {
    vec![
        Text("za"),
        Text(home),
        Text("-"),
        Text(away),
        Blank,
        hg,
        Text("-"),
        ag,
        ht.0,
        Text("-"),
        ht.1,
        scorers,
    ]
}

/// A division header row: the label sits in the home team column
pub fn division(label: &'static str) -> Vec<Cell> {
    vec![Blank, Text(label)]
}

/// Build an .xlsx with one worksheet per `(name, rows)` entry
pub fn xlsx(sheets: &[(&str, Vec<Vec<Cell>>)]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Text(s) => {
                        sheet.write_string(r as u32, c as u16, *s).unwrap();
                    }
                    Number(n) => {
                        sheet.write_number(r as u32, c as u16, *n).unwrap();
                    }
                    Blank => {}
                }
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

/// The two-sheet workbook: a division and a match on sheet one, a match on sheet two
pub fn two_sheet_workbook() -> Vec<u8> {
    xlsx(&[
        (
            "Zaterdag",
            vec![
                header(),
                division("2e klasse A"),
                fixture(
                    "Ajax",
                    "PSV",
                    Number(2.0),
                    Number(1.0),
                    (Number(1.0), Number(0.0)),
                    Text("Smit 12', Jansen 50'; De Jong 70'"),
                ),
            ],
        ),
        (
            "Zondag",
            vec![
                header(),
                fixture(
                    "Feyenoord",
                    "AZ",
                    Number(1.0),
                    Number(1.0),
                    (Number(0.0), Number(0.0)),
                    Text("Berghuis 60'; Pavlidis 88'"),
                ),
            ],
        ),
    ])
}
