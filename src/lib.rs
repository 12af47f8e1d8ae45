pub mod shared {
    pub mod core {
        pub mod actor;
        pub mod clock;
        pub mod decision;
        pub mod errors;
        pub mod primitives;
        pub mod status;
    }
    pub mod infrastructure {
        pub mod event_store;
        pub mod intent_outbox;
        pub mod projection;
    }
}

pub mod modules {
    pub mod users {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod projections;
            pub mod state;
        }
        pub mod use_cases {
            pub mod change_user_activation {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_users {
                pub mod projection;
                pub mod queries_port;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod register_user {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_user_profile {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod intent_outbox;
                pub mod projections_in_memory;
            }
        }
    }
    pub mod projects {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod projections;
            pub mod rules;
            pub mod state;
        }
        pub mod use_cases {
            pub mod assign_project_members {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_project {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_project {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_projects {
                pub mod projection;
                pub mod queries_port;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_project {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod intent_outbox;
                pub mod projections_in_memory;
            }
        }
    }
    pub mod time_entries {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod ports;
            pub mod projections;
            pub mod state;
        }
        pub mod use_cases {
            pub mod delete_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_time_entries {
                pub mod projection;
                pub mod queries_port;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod log_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod mirror_week_status {
                pub mod decide;
                pub mod handler;
            }
            pub mod review_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod revise_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod intent_outbox;
                pub mod projections_in_memory;
            }
        }
    }
    pub mod timers {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod ports;
            pub mod projections;
            pub mod state;
        }
        pub mod use_cases {
            pub mod start_timer {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod stop_timer {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod timer_status {
                pub mod projection;
                pub mod queries_port;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod intent_outbox;
                pub mod projections_in_memory;
            }
        }
    }
    pub mod weekly_timesheets {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod identity;
            pub mod intents;
            pub mod ports;
            pub mod projections;
            pub mod state;
        }
        pub mod use_cases {
            pub mod approve_week {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_week_entries {
                pub mod decide;
                pub mod handler;
            }
            pub mod reject_week {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod submit_week {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod view_weekly_timesheet {
                pub mod projection;
                pub mod queries_port;
                pub mod view;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod intent_outbox;
                pub mod projections_in_memory;
            }
        }
    }
    pub mod dashboard {
        pub mod use_cases {
            pub mod show_dashboard {
                pub mod view;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
