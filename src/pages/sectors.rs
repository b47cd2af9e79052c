use yew::prelude::*;

use crate::components::{CompanyTable, PerformanceChart, SectorChart, SectorDetail, Status};
use crate::config::Config;
use crate::hooks::use_companies::use_companies;
use crate::hooks::use_sectors::use_sectors;
use crate::hooks::use_table_state::use_table_state;
use crate::models::company::SortField;
use crate::models::sector::Sector;
use crate::models::table::TableAction;

#[derive(Properties, PartialEq)]
pub struct SectorsPageProps {
    #[prop_or(false)]
    pub dark_mode: bool,
    #[prop_or(Config::DEFAULT_COMPANY_LIMIT)]
    pub company_limit: u32,
}

/// Sector composition with a company table filtered by the selected sector.
#[function_component(SectorsPage)]
pub fn sectors_page(props: &SectorsPageProps) -> Html {
    let sectors = use_sectors();
    let companies = use_companies(props.company_limit);
    let table = use_table_state();

    let on_select = {
        let table = table.clone();
        Callback::from(move |sector: Sector| table.dispatch(TableAction::SelectSector(sector)))
    };
    let on_clear = {
        let table = table.clone();
        Callback::from(move |_: MouseEvent| table.dispatch(TableAction::ClearSelection))
    };
    let on_sort = {
        let table = table.clone();
        Callback::from(move |field: SortField| table.dispatch(TableAction::SortBy(field)))
    };

    html! {
        <div class="page sectors-page">
            <div class="page-header">
                <div>
                    <h1>{"KSE100 Sector Analysis"}</h1>
                    <p class="muted">{"Interactive sector composition and top companies"}</p>
                </div>
            </div>

            <section class="card">
                <div class="card-header">
                    <h2>{"Sector Composition"}</h2>
                    if table.selected.is_some() {
                        <button class="clear-button" onclick={on_clear}>{"Clear Selection"}</button>
                    }
                </div>

                <Status
                    loading={sectors.is_loading()}
                    error={sectors.error.clone()}
                    retrying={sectors.is_fetching}
                    on_retry={sectors.refetch.clone()}
                    loading_label="Loading sectors..."
                    error_title="Failed to load sector data"
                />

                if let Some(data) = &sectors.data {
                    <SectorChart
                        sectors={data.clone()}
                        selected={table.selected_id()}
                        {on_select}
                    />
                    if let Some(sector) = &table.selected {
                        <SectorDetail sector={sector.clone()} />
                    }
                    <PerformanceChart sectors={data.clone()} dark_mode={props.dark_mode} />
                }
            </section>

            <section class="card">
                <Status
                    loading={companies.is_loading()}
                    error={companies.error.clone()}
                    retrying={companies.is_fetching}
                    on_retry={companies.refetch.clone()}
                    loading_label="Loading companies..."
                    error_title="Failed to load companies"
                />

                if let Some(data) = &companies.data {
                    <CompanyTable
                        companies={data.clone()}
                        sector_filter={table.selected_name().map(|name| AttrValue::from(name.to_string()))}
                        sort={table.sort}
                        {on_sort}
                        title={table.title(props.company_limit)}
                    />
                }
            </section>
        </div>
    }
}
