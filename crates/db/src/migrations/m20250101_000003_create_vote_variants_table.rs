//! Create vote variants table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VoteVariants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VoteVariants::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VoteVariants::ElectionId).uuid().not_null())
                    .col(
                        ColumnDef::new(VoteVariants::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VoteVariants::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VoteVariants::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_variants_election_id")
                            .from(VoteVariants::Table, VoteVariants::ElectionId)
                            .to(Elections::Table, Elections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: election_id (per-election listings and variant-id resolution)
        manager
            .create_index(
                Index::create()
                    .name("idx_vote_variants_election_id")
                    .table(VoteVariants::Table)
                    .col(VoteVariants::ElectionId)
                    .to_owned(),
            )
            .await?;

        // Unique index: (election_id, name) - no duplicate options within one election
        manager
            .create_index(
                Index::create()
                    .name("idx_vote_variants_election_id_name")
                    .table(VoteVariants::Table)
                    .col(VoteVariants::ElectionId)
                    .col(VoteVariants::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VoteVariants::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum VoteVariants {
    Table,
    Id,
    ElectionId,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Elections {
    Table,
    Id,
}
