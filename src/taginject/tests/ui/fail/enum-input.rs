#![allow(dead_code)]

use taginject::Inject;

#[derive(Inject)]
enum Consumer {
    Empty,
}

fn main() {}
