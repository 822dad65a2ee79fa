// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod auth_test;
pub mod files_test;
pub mod scrape_test;
pub mod tasks_management_test;
