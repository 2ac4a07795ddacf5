use sarathi_planner::catalog::catalog::Catalog;

pub struct AppState {
    pub catalog: Catalog,
}
