use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Roles::Keyword).string().not_null().primary_key())
                    .col(ColumnDef::new(Roles::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Modules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Modules::Keyword)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Modules::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Actions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Actions::Keyword)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Actions::Name).string().not_null())
                    .col(ColumnDef::new(Actions::Score).integer().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Scopes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scopes::Keyword)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Scopes::Name).string().not_null())
                    .col(ColumnDef::new(Scopes::Score).integer().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RolePrivileges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RolePrivileges::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RolePrivileges::RoleKeyword).string().not_null())
                    .col(
                        ColumnDef::new(RolePrivileges::ModuleKeyword)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RolePrivileges::ActionKeyword)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RolePrivileges::ScopeKeyword)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_privileges_role")
                            .from(RolePrivileges::Table, RolePrivileges::RoleKeyword)
                            .to(Roles::Table, Roles::Keyword)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_privileges_module")
                            .from(RolePrivileges::Table, RolePrivileges::ModuleKeyword)
                            .to(Modules::Table, Modules::Keyword)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_privileges_action")
                            .from(RolePrivileges::Table, RolePrivileges::ActionKeyword)
                            .to(Actions::Table, Actions::Keyword)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_privileges_scope")
                            .from(RolePrivileges::Table, RolePrivileges::ScopeKeyword)
                            .to(Scopes::Table, Scopes::Keyword)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_role_privileges_unique")
                    .table(RolePrivileges::Table)
                    .col(RolePrivileges::RoleKeyword)
                    .col(RolePrivileges::ModuleKeyword)
                    .col(RolePrivileges::ActionKeyword)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RolePrivileges::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Scopes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Actions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Modules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Roles {
    Table,
    Keyword,
    Name,
}

#[derive(DeriveIden)]
enum Modules {
    Table,
    Keyword,
    Name,
}

#[derive(DeriveIden)]
enum Actions {
    Table,
    Keyword,
    Name,
    Score,
}

#[derive(DeriveIden)]
enum Scopes {
    Table,
    Keyword,
    Name,
    Score,
}

#[derive(DeriveIden)]
enum RolePrivileges {
    Table,
    Id,
    RoleKeyword,
    ModuleKeyword,
    ActionKeyword,
    ScopeKeyword,
}
