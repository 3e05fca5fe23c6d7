use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::CarResult,
    models::{Car, CarInput},
    repository::CarRepository,
};

pub struct PgCarRepository {
    db: DatabaseConnection,
}

impl PgCarRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CarRepository for PgCarRepository {
    async fn list(&self) -> CarResult<Vec<Car>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Car::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> CarResult<Option<Car>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Car::from))
    }

    async fn insert(&self, input: CarInput) -> CarResult<Car> {
        let model = entity::ActiveModel::from_input(None, input)
            .insert(&self.db)
            .await?;

        tracing::info!(car_id = model.id, condition = %model.condition, "Created car");
        Ok(model.into())
    }

    async fn replace(&self, id: i64, input: CarInput) -> CarResult<Option<Car>> {
        if entity::Entity::find_by_id(id).one(&self.db).await?.is_none() {
            return Ok(None);
        }

        // Deleted between the lookup and the update.
        let model = match entity::ActiveModel::from_input(Some(id), input)
            .update(&self.db)
            .await
        {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(car_id = id, "Replaced car");
        Ok(Some(model.into()))
    }

    async fn delete(&self, id: i64) -> CarResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(car_id = id, "Deleted car");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
