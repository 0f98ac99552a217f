mod builder;
pub use builder::Builder;

use crate::{
    clause::{self, Op},
    driver::{Capability, Driver},
    exec::Executor,
    Error, Model, Result,
};

use chrono::Utc;
use tabula_core::err;
use tabula_sql::{Filter, Statement};

/// A database handle: maps records to and from their tables.
///
/// `Db` is cheap to clone; clones share the underlying driver. Every
/// operation is independent and holds no lock across the database round
/// trip.
#[derive(Debug, Clone)]
pub struct Db {
    exec: Executor,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects to the database at `url`, choosing the driver from the URL
    /// scheme.
    pub async fn connect(url: &str) -> Result<Db> {
        Db::builder().connect(url).await
    }

    /// Appends every row of the model's table to `target`. Nothing is
    /// appended if any row fails to decode.
    pub async fn all<M: Model>(&self, target: &mut Vec<M>) -> Result<()> {
        self.all_records(target)
            .await
            .map_err(|err| err.context(op_context::<M>("all")))
    }

    /// Loads the row with identity `id` into `target`. When no such row
    /// exists the result is a record-not-found error and `target` is left
    /// as it was.
    pub async fn find<M: Model>(&self, target: &mut M, id: i64) -> Result<()> {
        self.find_record(target, id)
            .await
            .map_err(|err| err.context(op_context::<M>("find")))
    }

    /// Inserts `record` and reloads it from the inserted row, picking up the
    /// database-assigned identity and the lifecycle timestamps.
    pub async fn save<M: Model>(&self, record: &mut M) -> Result<()> {
        self.save_record(record)
            .await
            .map_err(|err| err.context(op_context::<M>("save")))
    }

    /// Writes the set fields of `record` to its row and reloads it. The
    /// creation timestamp is never written; the update timestamp is always
    /// refreshed.
    pub async fn update<M: Model>(&self, record: &mut M) -> Result<()> {
        self.update_record(record)
            .await
            .map_err(|err| err.context(op_context::<M>("update")))
    }

    /// Deletes the row of `record`.
    pub async fn destroy<M: Model>(&self, record: &M) -> Result<()> {
        self.destroy_record(record)
            .await
            .map_err(|err| err.context(op_context::<M>("destroy")))
    }

    pub fn driver(&self) -> &dyn Driver {
        self.exec.driver()
    }

    pub fn capability(&self) -> &Capability {
        self.driver().capability()
    }

    async fn all_records<M: Model>(&self, target: &mut Vec<M>) -> Result<()> {
        let binding = M::binding()?;
        let stmt = Statement::select_all(&binding.table);

        let records = self
            .exec
            .query_all(binding.model, &stmt)
            .await?
            .into_iter()
            .map(M::load)
            .collect::<Result<Vec<_>>>()?;

        target.extend(records);
        Ok(())
    }

    async fn find_record<M: Model>(&self, target: &mut M, id: i64) -> Result<()> {
        let binding = M::binding()?;
        let stmt = Statement::select(&binding.table, Filter::eq(binding.identity_column(), id));

        let row = self
            .exec
            .query_one(binding.model, &stmt)
            .await
            .map_err(|err| {
                if err.is_record_not_found() {
                    err.context(err!("{}={id}", binding.identity_column()))
                } else {
                    err
                }
            })?;

        target.reload(row)
    }

    async fn save_record<M: Model>(&self, record: &mut M) -> Result<()> {
        let binding = M::binding()?;
        let fields = record.describe()?;
        let (_, values) = clause::build(binding, &fields, Op::Create, Utc::now())?;
        let stmt = Statement::insert(&binding.table, values)?;

        let row = self.exec.query_one(binding.model, &stmt).await?;
        record.reload(row)
    }

    async fn update_record<M: Model>(&self, record: &mut M) -> Result<()> {
        let binding = M::binding()?;
        let fields = record.describe()?;
        let (identity, assignments) = clause::build(binding, &fields, Op::Update, Utc::now())?;
        let id = identity.ok_or_else(|| Error::missing_identity(binding.model))?;

        let stmt = Statement::update(
            &binding.table,
            assignments,
            Filter::eq(binding.identity_column(), id),
        )?;

        let row = self.exec.query_one(binding.model, &stmt).await?;
        record.reload(row)
    }

    async fn destroy_record<M: Model>(&self, record: &M) -> Result<()> {
        let binding = M::binding()?;
        let id = record
            .identity()?
            .ok_or_else(|| Error::missing_identity(binding.model))?;

        let stmt = Statement::delete(&binding.table, Filter::eq(binding.identity_column(), id));

        self.exec.execute(binding.model, &stmt).await?;
        Ok(())
    }
}

/// Context naming the model and the operation, e.g. `Article.update()`.
/// Falls back to the type name when the binding itself is what failed.
fn op_context<M: Model>(op: &str) -> Error {
    if let Ok(binding) = M::binding() {
        return err!("{}.{op}()", binding.model);
    }

    let name = std::any::type_name::<M>();
    let name = name.rsplit("::").next().unwrap_or(name);
    err!("{name}.{op}()")
}
