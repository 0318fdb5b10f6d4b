#![allow(dead_code)]

use std::sync::Arc;

use taginject::Inject;

#[derive(Inject)]
struct Consumer {
    #[inject(db)]
    db: Option<Arc<i32>>,
}

fn main() {}
