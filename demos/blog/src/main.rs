use chrono::{DateTime, Utc};
use tabula::Db;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, tabula::Model)]
struct Article {
    id: i64,
    title: String,
    text: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

async fn connect() -> tabula::Result<Db> {
    cfg_if::cfg_if! {
        if #[cfg(feature = "postgresql")] {
            let url = std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgresql://localhost:5432/tabula_blog".to_string());

            let driver = tabula_driver_postgresql::PostgreSQL::connect(&url).await?;
            driver
                .execute_batch(
                    "DROP TABLE IF EXISTS articles;
                     CREATE TABLE articles (
                         id BIGSERIAL PRIMARY KEY,
                         title TEXT NOT NULL,
                         text TEXT NOT NULL,
                         created_at TIMESTAMPTZ NOT NULL,
                         updated_at TIMESTAMPTZ NOT NULL
                     );",
                )
                .await?;
        } else {
            let driver = tabula_driver_sqlite::Sqlite::in_memory()?;
            driver.execute_batch(
                "CREATE TABLE articles (
                     id INTEGER PRIMARY KEY AUTOINCREMENT,
                     title TEXT NOT NULL,
                     text TEXT NOT NULL,
                     created_at TEXT NOT NULL,
                     updated_at TEXT NOT NULL
                 );",
            )?;
        }
    }

    Db::builder().register::<Article>().build(driver)
}

#[tokio::main]
async fn main() -> tabula::Result<()> {
    // `RUST_LOG=tabula=debug` shows every statement with its timing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let db = connect().await?;

    println!("==> db.save(&mut article)");
    let mut article = Article {
        title: "Hello, world".to_string(),
        text: "The first post.".to_string(),
        ..Default::default()
    };
    db.save(&mut article).await?;
    println!(" -> {article:#?}");

    println!("==> db.find(&mut found, {})", article.id);
    for _ in 0..3 {
        let mut found = Article::default();
        db.find(&mut found, article.id).await?;
        println!(" -> {}: {:?}", found.id, found.title);
    }

    println!("==> db.update(&mut article)");
    article.title = "Hello again".to_string();
    db.update(&mut article).await?;
    println!(" -> {article:#?}");

    println!("==> db.all(&mut articles)");
    let mut articles = vec![];
    db.all::<Article>(&mut articles).await?;
    println!(" -> {} article(s)", articles.len());

    println!("==> db.destroy(&article)");
    db.destroy(&article).await?;

    let mut missing = Article::default();
    if let Err(err) = db.find(&mut missing, article.id).await {
        println!(" -> {err}");
    }

    Ok(())
}
