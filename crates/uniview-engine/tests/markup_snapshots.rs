use uniview_engine::render;

#[test]
fn test_course_body_rendering() {
    let body = "**Objectifs du cours**\n\
                Ce cours introduit l'algorithmique et la **complexité**.\n\
                \n\
                - Tris élémentaires\n\
                - Récursivité\n\
                1. Projet de fin de semestre\n\
                \n\
                Évaluation sur machine en salle B204.";

    let html = render(body);
    insta::assert_snapshot!(html, @r"
    <h3>Objectifs du cours</h3>
    <p>Ce cours introduit l&#39;algorithmique et la <strong>complexité</strong>.</p>
    <br />
    <ul><li>Tris élémentaires</li><li>Récursivité</li><li>Projet de fin de semestre</li></ul>
    <br />
    <p>Évaluation sur machine en salle B204.</p>
    ");
}

#[test]
fn test_news_item_rendering() {
    let body = "Rentrée décalée au **9 septembre**.\n\nContact: <scolarite>";

    insta::assert_snapshot!(render(body), @r"
    <p>Rentrée décalée au <strong>9 septembre</strong>.</p>
    <br />
    <p>Contact: &lt;scolarite&gt;</p>
    ");
}

#[test]
fn test_discussion_message_rendering() {
    // hostile input stays inert
    let body = "<img src=x onerror=alert(1)>\n- \"quote\" & 'tick'";

    insta::assert_snapshot!(render(body), @r#"
    <p>&lt;img src=x onerror=alert(1)&gt;</p>
    <ul><li>&quot;quote&quot; &amp; &#39;tick&#39;</li></ul>
    "#);
}
