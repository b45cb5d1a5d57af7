use sea_orm::entity::prelude::*;

/// Direction of a vote on an entry or comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum VoteType {
    #[sea_orm(num_value = 1)]
    UpVote,
    #[sea_orm(num_value = 2)]
    DownVote,
}
