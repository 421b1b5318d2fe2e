//! Dynamic filter composition example
//!
//! Run with: cargo run --example dynamic_filters -p entity-query
//!
//! Set RUST_LOG=entity_query=trace to see the builder's tracing events.

use entity_query::{Entity, ImmutableQueryBuilder, QbError, QueryBuilder};
use tracing_subscriber::EnvFilter;

#[derive(Entity)]
#[entity(name = "Task", alias = "t")]
#[allow(dead_code)]
struct Task {
    id: i64,
    title: String,
    status: String,
    priority: i32,
    assignee: Option<String>,
}

/// Search parameters - all optional
struct TaskFilter {
    status: Option<String>,
    min_priority: Option<i32>,
    assignee: Option<String>,
    title_contains: Option<String>,
}

/// Build a query from whichever filter values are present.
fn search_tasks(filter: &TaskFilter) -> Result<QueryBuilder, QbError> {
    let mut q = QueryBuilder::of::<Task>();
    q.and_where_opt("t.status = ?", filter.status.as_deref())?
        .and_where_opt("t.priority >= ?", filter.min_priority)?
        .and_where_opt("t.assignee = ?", filter.assignee.as_deref())?
        .and_where_opt(
            "lower(t.title) like ?",
            filter
                .title_contains
                .as_ref()
                .map(|t| format!("%{}%", t.to_lowercase())),
        )?
        .order_by("t.priority DESC, t.id");
    Ok(q)
}

fn main() -> Result<(), QbError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let filter = TaskFilter {
        status: Some("open".to_string()),
        min_priority: Some(3),
        assignee: None,
        title_contains: Some("Report".to_string()),
    };

    let q = search_tasks(&filter)?;
    println!("{}", q.to_query());
    println!("{}", q.params().to_json());

    // Fork one base query into two variants.
    let base = ImmutableQueryBuilder::of::<Task>()
        .left_join("t.project p")
        .and_where("p.archived = ?", [false])?;
    let mine = base.and_where("t.assignee = ?", ["alice"])?;
    let urgent = base.or_where("t.priority > ?", [8])?.order_by("t.priority DESC");

    for q in [&base, &mine, &urgent] {
        let built = q.build();
        println!("{}\n  {}", built.query, built.params.to_json());
    }

    Ok(())
}
