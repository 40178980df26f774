pub mod application {
    pub mod catalog {
        pub mod add_product;
        pub mod list_categories;
        pub mod list_deals;
        pub mod list_products;
        pub mod update_price;
    }
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get;
    }
    pub mod order {
        pub mod checkout;
        pub mod get_all;
        pub mod update_status;
    }
    pub mod session {
        pub mod end;
        pub mod get;
        pub mod guard;
        pub mod login;
        pub mod logout;
        pub mod start;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod catalog {
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add_product;
            pub mod list_categories;
            pub mod list_deals;
            pub mod list_products;
            pub mod update_price;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod checkout;
            pub mod get_all;
            pub mod update_status;
        }
    }
    pub mod session {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod end;
            pub mod get;
            pub mod login;
            pub mod logout;
            pub mod start;
        }
    }
}
