use std::convert::Infallible;
use std::env;
use std::error::Error;
use std::process;
use std::sync::Arc;

use snafu::prelude::*;
use taginject::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_DSN: &str = "root:root@tcp(localhost)/sampledb";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let dsn = env::var("TAGINJECT_DEMO_DSN").unwrap_or_else(|_| String::from(DEFAULT_DSN));
    let container = Container::new();
    if let Err(err) = container.install(AppModule::new(dsn)) {
        eprintln!("error: {err}");
        if let Some(source) = err.source() {
            eprintln!("caused by: {source}");
        }
        process::exit(1);
    }

    let mut a = A::default();
    if let Err(err) = container.ensure(&mut a) {
        eprintln!("error: {err}");
        return;
    }

    // Singletons share one allocation while prototypes don't.
    println!("db0: {:p}", injected_ptr(&a.db0));
    println!("db1: {:p}", injected_ptr(&a.db1));
    println!("b0: {:p}", injected_ptr(&a.b0));
    println!("b1: {:p}", injected_ptr(&a.b1));
    println!("version: {}", a.version());
    println!("{}", container.dump());
}

fn injected_ptr<T>(slot: &Option<Arc<T>>) -> *const T {
    slot.as_ref().map_or(std::ptr::null(), Arc::as_ptr)
}

struct AppModule {
    dsn: String,
}

impl AppModule {
    fn new(dsn: String) -> Self {
        Self { dsn }
    }
}

impl Module for AppModule {
    fn configure(&self, container: &Container) -> Result<(), Box<dyn Error + Send + Sync>> {
        let db = Database::open(&self.dsn)?;
        container.register_singleton("db", Arc::new(db));
        container.register_factory("b", || Ok::<_, Infallible>(Arc::new(B::new())));
        Ok(())
    }
}

/// A stand-in for a real connection pool, parsed from a
/// `user:password@tcp(host)/database` DSN.
#[derive(Debug)]
struct Database {
    user: String,
    host: String,
    name: String,
}

impl Database {
    fn open(dsn: &str) -> Result<Self, DatabaseError> {
        let (credentials, location) = dsn.split_once('@').context(InvalidDsnSnafu { dsn })?;
        let user = credentials.split(':').next().unwrap_or_default();
        let (address, name) = location.split_once('/').context(InvalidDsnSnafu { dsn })?;
        let host = address
            .strip_prefix("tcp(")
            .and_then(|rest| rest.strip_suffix(')'))
            .context(InvalidDsnSnafu { dsn })?;

        Ok(Self {
            user: user.to_owned(),
            host: host.to_owned(),
            name: name.to_owned(),
        })
    }

    fn version(&self) -> String {
        format!("demo-1.0 ({}@{}/{})", self.user, self.host, self.name)
    }
}

#[derive(Debug, Snafu)]
enum DatabaseError {
    #[snafu(display("invalid DSN `{dsn}`"))]
    InvalidDsn { dsn: String },
}

#[derive(Debug)]
struct B;

impl B {
    fn new() -> Self {
        Self
    }
}

#[derive(Default, Inject)]
struct A {
    #[inject("db")]
    db0: Option<Arc<Database>>,
    #[inject("db")]
    db1: Option<Arc<Database>>,
    #[inject("b,prototype")]
    b0: Option<Arc<B>>,
    #[inject("b,prototype")]
    b1: Option<Arc<B>>,
}

impl A {
    fn db(&self) -> &Arc<Database> {
        self.db0
            .as_ref()
            .unwrap_or_else(|| unreachable!("`db0` should be injected before use"))
    }

    fn version(&self) -> String {
        self.db().version()
    }
}
