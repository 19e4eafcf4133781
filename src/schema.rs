//! Diesel table definitions for the authoritative (public) schema.
//!
//! The physical tables are produced by the migration sequence in
//! [`crate::migrations`]; the `test_schema` namespace mirrors these tables
//! but is maintained by migrations only and has no mappings here.

diesel::table! {
    tenants (tenant_id) {
        tenant_id -> Uuid,
        name -> Varchar,
        api_key_hash -> Nullable<Varchar>,
        plan_details -> Nullable<Jsonb>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    users (user_id) {
        user_id -> Uuid,
        tenant_id -> Uuid,
        username -> Varchar,
        email -> Varchar,
        password_hash -> Varchar,
        full_name -> Nullable<Varchar>,
        role -> Varchar,
        is_active -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    campaigns (campaign_id) {
        campaign_id -> Uuid,
        name -> Varchar,
        description -> Nullable<Text>,
        status -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        tenant_id -> Uuid,
        user_id -> Uuid,
        settings -> Nullable<Jsonb>,
    }
}

diesel::table! {
    organizations (organization_id) {
        organization_id -> Uuid,
        name -> Varchar,
        email_domain -> Varchar,
        external_id -> Nullable<Varchar>,
        external_source -> Nullable<Varchar>,
        website_url -> Nullable<Varchar>,
        linkedin_url -> Nullable<Varchar>,
        estimated_num_employees -> Nullable<Int4>,
        website_summary_data -> Nullable<Jsonb>,
        website_raw_data -> Nullable<Jsonb>,
        country -> Nullable<Varchar>,
        language -> Nullable<Varchar>,
        time_zone -> Nullable<Varchar>,
        source -> Nullable<Varchar>,
        formatted_organization_name -> Nullable<Varchar>,
        raw_address -> Nullable<Varchar>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    leads (lead_id) {
        lead_id -> Uuid,
        campaign_id -> Uuid,
        company_id -> Uuid,
        first_name -> Nullable<Varchar>,
        last_name -> Nullable<Varchar>,
        email -> Varchar,
        external_id -> Nullable<Varchar>,
        title -> Nullable<Varchar>,
        headline -> Nullable<Varchar>,
        linkedin_url -> Nullable<Varchar>,
        email_verification_status -> Nullable<Varchar>,
        email_verification_message -> Nullable<Varchar>,
        email_icebreaker -> Nullable<Varchar>,
        status -> Varchar,
        language -> Nullable<Varchar>,
        source -> Nullable<Varchar>,
        email_sent_at -> Nullable<Timestamptz>,
        reply_received_at -> Nullable<Timestamptz>,
        last_contacted_at -> Nullable<Timestamptz>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        linkedin_data -> Nullable<Varchar>,
        tenant_id -> Uuid,
        custom_fields -> Nullable<Jsonb>,
        is_validated -> Bool,
    }
}

diesel::table! {
    outbound_emails (outbound_email_id) {
        outbound_email_id -> Uuid,
        tenant_id -> Uuid,
        campaign_id -> Uuid,
        lead_id -> Uuid,
        parent_outbound_email_id -> Nullable<Uuid>,
        subject_actual -> Text,
        body_actual -> Text,
        status -> Varchar,
        scheduled_send_time -> Nullable<Timestamptz>,
        actual_send_time -> Nullable<Timestamptz>,
        opened_at -> Nullable<Timestamptz>,
        clicked_at -> Nullable<Timestamptz>,
        error_message -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    email_replies (reply_id) {
        reply_id -> Uuid,
        tenant_id -> Uuid,
        outbound_email_id -> Uuid,
        lead_id -> Uuid,
        reply_received_at -> Timestamptz,
        reply_subject -> Nullable<Text>,
        reply_body -> Nullable<Text>,
        ai_classification -> Nullable<Varchar>,
        classification_confidence -> Nullable<Float8>,
        classified_at -> Nullable<Timestamptz>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(users -> tenants (tenant_id));
diesel::joinable!(campaigns -> tenants (tenant_id));
diesel::joinable!(campaigns -> users (user_id));
diesel::joinable!(leads -> campaigns (campaign_id));
diesel::joinable!(leads -> organizations (company_id));
diesel::joinable!(leads -> tenants (tenant_id));
diesel::joinable!(outbound_emails -> campaigns (campaign_id));
diesel::joinable!(outbound_emails -> leads (lead_id));
diesel::joinable!(outbound_emails -> tenants (tenant_id));
diesel::joinable!(email_replies -> outbound_emails (outbound_email_id));
diesel::joinable!(email_replies -> leads (lead_id));
diesel::joinable!(email_replies -> tenants (tenant_id));

diesel::allow_tables_to_appear_in_same_query!(
    tenants,
    users,
    campaigns,
    organizations,
    leads,
    outbound_emails,
    email_replies,
);
