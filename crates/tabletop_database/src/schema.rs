// Diesel table definitions for the entity store.
//
// Kept in sync by hand with migrations/*/up.sql.

diesel::table! {
    players (id) {
        id -> BigInt,
        name -> Text,
        member_id -> Text,
        guild_id -> Text,
        channel_id -> Text,
        #[sql_name = "type"]
        player_type -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    campaigns (id) {
        id -> BigInt,
        name -> Text,
        guild_id -> Text,
        channel_id -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    characters (id) {
        id -> BigInt,
        name -> Text,
        avatar_url -> Nullable<Text>,
        #[sql_name = "type"]
        character_type -> Text,
        player_id -> BigInt,
        campaign_id -> BigInt,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::joinable!(characters -> players (player_id));
diesel::joinable!(characters -> campaigns (campaign_id));

diesel::allow_tables_to_appear_in_same_query!(campaigns, characters, players,);
