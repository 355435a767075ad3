pub mod application {
    pub mod cart {
        pub mod add_listing;
        pub mod manager;
    }
    pub mod catalog {
        pub mod get_by_id;
        pub mod get_featured;
        pub mod search;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod notification;
        pub mod record;
        pub mod repository;
        pub mod service;
        pub mod use_cases {
            pub mod add_listing;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod get_by_id;
            pub mod get_featured;
            pub mod search;
        }
    }
}
