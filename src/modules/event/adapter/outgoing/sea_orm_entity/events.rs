use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub event_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub event_name: String,

    pub event_date: DateTime,

    #[sea_orm(nullable)]
    pub duration: Option<i32>,

    #[sea_orm(column_type = "Text", nullable)]
    pub event_description: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub poster: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub reg_link: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub whatsapp_link: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub venue: Option<String>,

    pub visibility: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::registration::adapter::outgoing::sea_orm_entity::registrations::Entity"
    )]
    Registrations,
}

impl Related<crate::modules::registration::adapter::outgoing::sea_orm_entity::registrations::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Registrations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
