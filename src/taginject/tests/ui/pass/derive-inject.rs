use std::sync::Arc;

use taginject::prelude::*;

pub struct Database;

pub struct Session;

#[derive(Default, Inject)]
pub struct Test1 {
    #[inject("db")]
    pub db: Option<Arc<Database>>,
    #[inject("session,prototype")]
    pub session: Option<Arc<Session>>,
    pub untouched: u32,
}

#[derive(Inject)]
pub struct Test2;

#[derive(Inject)]
pub struct Test3 {}

#[derive(Inject)]
pub struct Test4<T>
where
    T: Send + Sync + 'static,
{
    #[inject("value")]
    pub value: Option<Arc<T>>,
    #[inject("")]
    pub skipped: Option<u8>,
}

#[derive(Inject)]
pub struct Test5<'a> {
    pub borrowed: &'a str,
    #[inject("count,prototype")]
    pub r#type: Option<usize>,
}

fn main() {
    let mut test = Test1::default();
    assert_eq!(test.injection_points().len(), 2);

    let mut test = Test2;
    assert!(test.injection_points().is_empty());

    let mut test = Test4::<i32> {
        value: None,
        skipped: None,
    };
    let points = test.injection_points();
    assert_eq!(points[0].field(), "value");
    assert_eq!(points[1].annotation(), "");

    let mut test = Test5 {
        borrowed: "str",
        r#type: None,
    };
    assert_eq!(test.injection_points()[0].field(), "type");
}
