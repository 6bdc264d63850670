//! HTML/JS emission for the catalogue document.
//!
//! Produces a single self-contained file: inline styling, inline filtering
//! script, no external assets. All cell values and attributes are escaped;
//! values recognized as absolute http(s) URLs render as clickable links.

use super::classify::ColumnClassification;
use std::fmt::Write;
use url::Url;

/// Everything the emitter needs to render one document.
pub struct CatalogueDocument<'a> {
    pub title: &'a str,
    pub headers: &'a [String],
    pub rows: &'a [Vec<String>],
    pub classification: &'a ColumnClassification,
    pub cpu_options: &'a [String],
    pub ram_options: &'a [String],
}

/// Escape a string for HTML text and attribute contexts.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Whether a cell value is an absolute URL with an http or https scheme.
pub fn is_absolute_url(value: &str) -> bool {
    (value.starts_with("http://") || value.starts_with("https://"))
        && Url::parse(value).is_ok()
}

/// Decorative cell class for well-known column names.
fn cell_class(header: &str) -> &'static str {
    match header.to_lowercase().as_str() {
        "name" | "product name" | "název" | "nazev" => "product-name",
        "price" | "cena" | "cost" => "product-price",
        "link" | "url" | "alza link" | "odkaz" => "product-link",
        _ => "",
    }
}

const STYLE: &str = r#"        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: #f5f7fa; color: #333; padding: 20px;
        }
        .container { max-width: 1600px; margin: 0 auto; }
        .header {
            background: white; padding: 30px; border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.08); margin-bottom: 20px;
        }
        h1 { font-size: 2em; color: #1a1a1a; margin-bottom: 20px; font-weight: 600; }
        .controls { display: flex; gap: 15px; align-items: center; flex-wrap: wrap; margin-bottom: 20px; }
        .filter-group { display: flex; flex-direction: column; gap: 5px; }
        .filter-label {
            font-size: 0.85em; font-weight: 600; color: #64748b;
            text-transform: uppercase; letter-spacing: 0.5px;
        }
        .filter-select {
            padding: 10px 15px; border: 2px solid #e2e8f0; border-radius: 6px;
            font-size: 0.95em; background: white; cursor: pointer; min-width: 180px;
            transition: all 0.2s ease;
        }
        .filter-select:hover { border-color: #5a67d8; }
        .filter-select:focus {
            outline: none; border-color: #5a67d8;
            box-shadow: 0 0 0 3px rgba(90, 103, 216, 0.1);
        }
        .search-box { flex: 1; min-width: 300px; }
        .search-input {
            width: 100%; padding: 12px 16px; border: 2px solid #e2e8f0;
            border-radius: 6px; font-size: 0.95em; transition: all 0.2s ease;
        }
        .search-input:focus { outline: none; border-color: #5a67d8; }
        .clear-filters {
            background: #ef4444; color: white; border: none; padding: 10px 20px;
            border-radius: 6px; font-size: 0.9em; cursor: pointer;
            transition: all 0.2s ease; font-weight: 500;
        }
        .clear-filters:hover { background: #dc2626; }
        .filter-info {
            background: #eff6ff; border: 2px solid #bfdbfe; padding: 12px 16px;
            border-radius: 6px; color: #1e40af; font-size: 0.9em;
        }
        .table-container {
            background: white; border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.08); overflow: hidden;
        }
        table { width: 100%; border-collapse: collapse; }
        thead { background: #f8fafc; border-bottom: 2px solid #e2e8f0; }
        th {
            padding: 16px 20px; text-align: left; font-weight: 600; color: #475569;
            font-size: 0.85em; text-transform: uppercase; letter-spacing: 0.5px;
        }
        th:first-child { padding-left: 24px; width: 60px; }
        tbody tr { border-bottom: 1px solid #f1f5f9; transition: background 0.15s ease; }
        tbody tr:hover { background: #f8fafc; }
        tbody tr:nth-child(even) { background: #fafbfc; }
        tbody tr:nth-child(even):hover { background: #f1f5f9; }
        tbody tr.hidden { display: none; }
        td { padding: 16px 20px; color: #334155; font-size: 0.95em; }
        td:first-child { padding-left: 24px; color: #64748b; font-weight: 500; width: 60px; }
        .detail-icon { color: #5a67d8; cursor: pointer; font-size: 1.2em; transition: color 0.2s; }
        .detail-icon:hover { color: #4c51bf; }
        .product-name { font-weight: 500; color: #1a202c; }
        .product-price { font-weight: 600; color: #2d3748; }
        .product-link a {
            color: #5a67d8; text-decoration: none; transition: color 0.2s;
            word-break: break-all;
        }
        .product-link a:hover { color: #4c51bf; text-decoration: underline; }
        .no-results { text-align: center; padding: 60px 20px; color: #94a3b8; font-size: 1.1em; }
        .footer {
            margin-top: 20px; padding: 16px 24px; background: white; border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.08); color: #64748b; font-size: 0.9em;
            display: flex; justify-content: space-between; align-items: center;
        }
        @media (max-width: 768px) {
            .table-container { overflow-x: auto; }
            table { min-width: 600px; }
            h1 { font-size: 1.5em; }
            .controls { flex-direction: column; align-items: stretch; }
            .filter-group, .search-box { width: 100%; }
            .filter-select { width: 100%; }
        }
"#;

const SCRIPT: &str = r#"        const cpuFilter = document.getElementById('cpuFilter');
        const ramFilter = document.getElementById('ramFilter');
        const searchInput = document.getElementById('searchInput');
        const clearFiltersBtn = document.getElementById('clearFilters');
        const tableBody = document.getElementById('tableBody');
        const tableContainer = document.querySelector('.table-container');
        const noResults = document.getElementById('noResults');
        const filterInfo = document.getElementById('filterInfo');
        const visibleCount = document.getElementById('visibleCount');

        // A row is visible iff every active filter matches: exact equality
        // for the dropdowns, substring for the search text, both
        // case-insensitive.
        function applyFilters() {
            const cpuValue = cpuFilter ? cpuFilter.value.toLowerCase() : '';
            const ramValue = ramFilter ? ramFilter.value.toLowerCase() : '';
            const searchTerm = searchInput.value.toLowerCase();

            const rows = tableBody.querySelectorAll('tr');
            let visibleRowCount = 0;

            rows.forEach(row => {
                const rowCpu = (row.dataset.cpu || '').toLowerCase();
                const rowRam = (row.dataset.ram || '').toLowerCase();
                const rowText = row.textContent.toLowerCase();

                const matchesCpu = !cpuValue || rowCpu === cpuValue;
                const matchesRam = !ramValue || rowRam === ramValue;
                const matchesSearch = !searchTerm || rowText.includes(searchTerm);

                if (matchesCpu && matchesRam && matchesSearch) {
                    row.classList.remove('hidden');
                    visibleRowCount++;
                } else {
                    row.classList.add('hidden');
                }
            });

            visibleCount.textContent = visibleRowCount;

            if (visibleRowCount === 0) {
                tableContainer.style.display = 'none';
                noResults.style.display = 'block';
            } else {
                tableContainer.style.display = 'block';
                noResults.style.display = 'none';
            }

            updateFilterInfo(cpuValue, ramValue, searchTerm);
        }

        function updateFilterInfo(cpu, ram, search) {
            const filters = [];
            if (cpu) filters.push(`CPU: ${cpu}`);
            if (ram) filters.push(`RAM: ${ram}`);
            if (search) filters.push(`Search: "${search}"`);

            if (filters.length > 0) {
                filterInfo.textContent = 'Active filters: ' + filters.join(' | ');
                filterInfo.style.display = 'block';
            } else {
                filterInfo.style.display = 'none';
            }
        }

        function clearAllFilters() {
            if (cpuFilter) cpuFilter.value = '';
            if (ramFilter) ramFilter.value = '';
            searchInput.value = '';
            applyFilters();
        }

        if (cpuFilter) cpuFilter.addEventListener('change', applyFilters);
        if (ramFilter) ramFilter.addEventListener('change', applyFilters);
        searchInput.addEventListener('input', applyFilters);
        clearFiltersBtn.addEventListener('click', clearAllFilters);
"#;

/// Render a filter dropdown with an empty "all" option plus one option per
/// domain value.
fn render_select(out: &mut String, id: &str, label: &str, all_label: &str, options: &[String]) {
    let _ = writeln!(out, r#"                <div class="filter-group">"#);
    let _ = writeln!(out, r#"                    <label class="filter-label">{label}</label>"#);
    let _ = writeln!(out, r#"                    <select class="filter-select" id="{id}">"#);
    let _ = writeln!(out, r#"                        <option value="">{all_label}</option>"#);
    for value in options {
        let escaped = escape_html(value);
        let _ = writeln!(
            out,
            r#"                        <option value="{escaped}">{escaped}</option>"#
        );
    }
    out.push_str("                    </select>\n                </div>\n");
}

/// Render one table row: sequence number, decorative detail marker, then
/// every input column in original order.
fn render_row(
    out: &mut String,
    index: usize,
    row: &[String],
    headers: &[String],
    classification: &ColumnClassification,
) {
    let cpu_tag = classification
        .cpu
        .and_then(|c| row.get(c))
        .map(|v| v.as_str())
        .unwrap_or("");
    let ram_tag = classification
        .ram
        .and_then(|c| row.get(c))
        .map(|v| v.as_str())
        .unwrap_or("");

    let _ = writeln!(
        out,
        "                    <tr data-cpu=\"{}\" data-ram=\"{}\">",
        escape_html(cpu_tag),
        escape_html(ram_tag)
    );
    let _ = writeln!(out, "                        <td>{index}</td>");
    out.push_str("                        <td><span class=\"detail-icon\">&#8857;</span></td>\n");

    for (header, value) in headers.iter().zip(row.iter()) {
        let class = cell_class(header);
        if !value.is_empty() && is_absolute_url(value) {
            let escaped = escape_html(value);
            let _ = writeln!(
                out,
                "                        <td class=\"{class}\"><a href=\"{escaped}\" target=\"_blank\">{escaped}</a></td>"
            );
        } else {
            let _ = writeln!(
                out,
                "                        <td class=\"{class}\">{}</td>",
                escape_html(value)
            );
        }
    }
    out.push_str("                    </tr>\n");
}

/// Assemble the full document.
pub fn render_document(doc: &CatalogueDocument) -> String {
    let title = escape_html(doc.title);
    let total = doc.rows.len();
    let mut out = String::with_capacity(16 * 1024);

    let _ = write!(
        out,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{STYLE}    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{title}</h1>
            <div class="controls">
"#
    );

    if doc.classification.cpu.is_some() && !doc.cpu_options.is_empty() {
        render_select(&mut out, "cpuFilter", "CPU", "All CPUs", doc.cpu_options);
    }
    if doc.classification.ram.is_some() && !doc.ram_options.is_empty() {
        render_select(&mut out, "ramFilter", "RAM", "All RAM", doc.ram_options);
    }

    out.push_str(
        r#"                <div class="search-box">
                    <input type="text" class="search-input" id="searchInput" placeholder="Search items...">
                </div>

                <button class="clear-filters" id="clearFilters">Clear Filters</button>
            </div>

            <div class="filter-info" id="filterInfo" style="display: none;"></div>
        </div>

        <div class="table-container">
            <table id="productTable">
                <thead>
                    <tr>
                        <th>No.</th>
                        <th>Detail</th>
"#,
    );

    for header in doc.headers {
        let _ = writeln!(out, "                        <th>{}</th>", escape_html(header));
    }

    out.push_str(
        r#"                    </tr>
                </thead>
                <tbody id="tableBody">
"#,
    );

    for (i, row) in doc.rows.iter().enumerate() {
        render_row(&mut out, i + 1, row, doc.headers, doc.classification);
    }

    let _ = write!(
        out,
        r#"                </tbody>
            </table>
        </div>

        <div class="no-results" id="noResults" style="display: none;">
            No items found matching your filters.
        </div>

        <div class="footer">
            <div id="recordCount">
                <strong>Total records:</strong> <span id="visibleCount">{total}</span> of {total} item(s)
            </div>
        </div>
    </div>

    <script>
{SCRIPT}    </script>
</body>
</html>
"#
    );

    out
}
