fn main() {
    use scraper::{Html, Selector};
    let html = r#"
    <tbody class="row-hover">
        <tr><td class="column-2"><a href="https://animeitaly.tv/not-a-video/">x</a></td></tr>
    </tbody>"#;
    let page = Html::parse_document(html);
    let sel = Selector::parse(".row-hover .column-2 a").unwrap();
    let n = page.select(&sel).count();
    println!("matches: {}", n);
    // compare with table wrapper
    let html2 = format!("<table>{}</table>", html);
    let page2 = Html::parse_document(&html2);
    println!("with table: {}", page2.select(&sel).count());
}
