pub mod application {
    pub mod health {
        pub mod check_readiness;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod health {
        pub mod data_client;
        pub mod use_cases {
            pub mod check_readiness;
        }
    }
}
