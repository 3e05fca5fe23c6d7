use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(CarCondition::Enum)
                    .values([CarCondition::New, CarCondition::Used])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Cars::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cars::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Cars::Condition)
                            .enumeration(CarCondition::Enum, [CarCondition::New, CarCondition::Used])
                            .not_null()
                            .default("used"),
                    )
                    .col(string_len(Cars::Make, 100))
                    .col(string_len_null(Cars::Model, 100))
                    .col(string_null(Cars::Body))
                    .col(string_null(Cars::Engine))
                    .col(string_null(Cars::FuelType))
                    .col(string_null(Cars::ExternalColor))
                    .col(integer_null(Cars::ModelYear))
                    .col(integer_null(Cars::ProductionYear))
                    .col(integer_null(Cars::Mileage))
                    .col(integer_null(Cars::NumberOfDoors))
                    .col(double_null(Cars::Lat))
                    .col(double_null(Cars::Lon))
                    .col(
                        timestamp_with_time_zone(Cars::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Cars::ModifiedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cars_make")
                    .table(Cars::Table)
                    .col(Cars::Make)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER cars_touch_modified_at
                    BEFORE UPDATE ON cars
                    FOR EACH ROW
                    EXECUTE FUNCTION util.touch_modified_at()
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS cars_touch_modified_at ON cars")
            .await?;

        manager
            .drop_table(Table::drop().table(Cars::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(CarCondition::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Cars {
    Table,
    Id,
    Condition,
    Make,
    Model,
    Body,
    Engine,
    FuelType,
    ExternalColor,
    ModelYear,
    ProductionYear,
    Mileage,
    NumberOfDoors,
    Lat,
    Lon,
    CreatedAt,
    ModifiedAt,
}

#[derive(DeriveIden)]
enum CarCondition {
    #[sea_orm(iden = "car_condition")]
    Enum,
    #[sea_orm(iden = "new")]
    New,
    #[sea_orm(iden = "used")]
    Used,
}
