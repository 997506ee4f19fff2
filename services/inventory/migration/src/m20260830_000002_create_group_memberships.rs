use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupMemberships::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GroupMemberships::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(GroupMemberships::GroupName)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GroupMemberships::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(GroupMemberships::UserId)
                            .col(GroupMemberships::GroupName),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GroupMemberships::Table, GroupMemberships::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupMemberships::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum GroupMemberships {
    Table,
    UserId,
    GroupName,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
