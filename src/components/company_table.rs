use crate::models::company::{Company, SortField};
use crate::models::table::{SortState, visible_companies};
use crate::utils::format::{direction_class, format_currency, format_percent, format_scaled};
use std::rc::Rc;
use yew::prelude::*;

/// Header label and alignment of each column, in display order.
const COLUMNS: &[(SortField, &str, bool)] = &[
    (SortField::Rank, "Rank", false),
    (SortField::Symbol, "Symbol", false),
    (SortField::Name, "Company", false),
    (SortField::Sector, "Sector", false),
    (SortField::Price, "Price", true),
    (SortField::ChangePercent, "Change", true),
    (SortField::MarketCap, "Market Cap", true),
    (SortField::PeRatio, "P/E", true),
    (SortField::DividendYield, "Div Yield", true),
    (SortField::Volume, "Volume", true),
];

#[derive(Properties, PartialEq)]
pub struct CompanyTableProps {
    pub companies: Rc<Vec<Company>>,
    /// Only rows whose sector equals this name are shown.
    #[prop_or_default]
    pub sector_filter: Option<AttrValue>,
    pub sort: SortState,
    pub on_sort: Callback<SortField>,
    #[prop_or_else(|| AttrValue::from("Top Companies"))]
    pub title: AttrValue,
}

#[function_component(CompanyTable)]
pub fn company_table(props: &CompanyTableProps) -> Html {
    let rows = use_memo(
        (props.companies.clone(), props.sector_filter.clone(), props.sort),
        |(companies, filter, sort)| visible_companies(companies, filter.as_deref(), *sort),
    );

    let headers = COLUMNS.iter().map(|&(field, label, numeric)| {
        let on_sort = props.on_sort.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_sort.emit(field));
        let class = classes!("sortable", numeric.then_some("numeric"));
        let icon = (props.sort.field == field).then(|| props.sort.direction.icon());

        html! {
            <th {class} {onclick} scope="col">
                {label}
                if let Some(icon) = icon {
                    <span class="sort-icon">{icon}</span>
                }
            </th>
        }
    });

    html! {
        <div class="company-table">
            <h2>{&props.title}</h2>
            <div class="table-scroll">
                <table>
                    <thead>
                        <tr>{ for headers }</tr>
                    </thead>
                    <tbody>
                        { for rows.iter().map(company_row) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn company_row(company: &Company) -> Html {
    let change_cell = format!("numeric {}", direction_class(company.change_percent));

    html! {
        <tr key={company.symbol.clone()}>
            <td>{company.rank}</td>
            <td class="symbol">{&company.symbol}</td>
            <td class="company-name">{&company.name}</td>
            <td class="muted">{&company.sector}</td>
            <td class="numeric">{format_currency(company.price, false)}</td>
            <td class={change_cell}>{format_percent(company.change_percent)}</td>
            <td class="numeric">{format_scaled(company.market_cap as f64, 1e9, "B")}</td>
            <td class="numeric">{format!("{:.1}", company.pe_ratio)}</td>
            <td class="numeric">{format!("{:.1}%", company.dividend_yield)}</td>
            <td class="numeric muted">{format_scaled(company.volume as f64, 1e6, "M")}</td>
        </tr>
    }
}
