use yew::prelude::*;

struct Highlight {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

struct Step {
    number: &'static str,
    title: &'static str,
    description: &'static str,
}

const PAIN_POINTS: [Highlight; 3] = [
    Highlight {
        icon: "⏰",
        title: "Horários Inflexíveis",
        description: "Pare de tentar encaixar sua vida na agenda da autoescola. Tenha controle total.",
    },
    Highlight {
        icon: "👥",
        title: "Instrutores Mal Avaliados",
        description: "Sem surpresas. No Habilit você escolhe quem vai te ensinar baseado em avaliações reais.",
    },
    Highlight {
        icon: "📱",
        title: "Processos Analógicos",
        description: "Agendamentos por papel e burocracia infinita são coisas do passado.",
    },
];

const SOLUTION_BULLETS: [&str; 4] = [
    "Seleção inteligente baseada no seu perfil de aprendizado.",
    "Agendamento instantâneo via aplicativo.",
    "Pagamento seguro e transparente.",
    "Acompanhamento de progresso em tempo real.",
];

const SOLUTION_CARDS: [Highlight; 4] = [
    Highlight {
        icon: "📍",
        title: "Perto de você",
        description: "Encontre instrutores na sua região.",
    },
    Highlight {
        icon: "🛡️",
        title: "100% Credenciados",
        description: "Apenas profissionais verificados.",
    },
    Highlight {
        icon: "📅",
        title: "Flexibilidade",
        description: "Aulas no seu horário disponível.",
    },
    Highlight {
        icon: "⭐",
        title: "Avaliações",
        description: "Transparência total no ensino.",
    },
];

const STEPS: [Step; 3] = [
    Step {
        number: "01",
        title: "Crie seu Perfil",
        description: "Defina seus objetivos e preferências de aprendizado no app.",
    },
    Step {
        number: "02",
        title: "Escolha o Instrutor",
        description: "Compare perfis e avaliações para encontrar o match perfeito.",
    },
    Step {
        number: "03",
        title: "Agende sua Aula",
        description: "Escolha o dia, hora e local. Tudo direto pelo seu celular.",
    },
];

const INSTRUCTOR_BENEFITS: [Highlight; 2] = [
    Highlight {
        icon: "📈",
        title: "Maior Faturamento",
        description: "Receba por aula dada, sem intermediários abusivos.",
    },
    Highlight {
        icon: "📅",
        title: "Gestão de Agenda",
        description: "Defina sua disponibilidade e gerencie tudo via app.",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <Hero />
            <PainPoints />
            <Solution />
            <HowItWorks />
            <ForInstructors />
            <FinalCta />
            <Footer />
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header class="hero">
            <div class="hero-content">
                <span class="hero-badge">{ "📈 A revolução das autoescolas chegou" }</span>
                <h1 class="hero-title">
                    { "Tire sua CNH " }
                    <span class="hero-highlight">{ "sem estresse." }</span>
                </h1>
                <p class="hero-subtitle">
                    { "Escolha o instrutor ideal para o seu perfil e aprenda a dirigir no seu \
                       tempo. Liberdade, flexibilidade e segurança em uma única plataforma." }
                </p>
                <div class="hero-cta-group">
                    <button class="hero-cta">{ "Quero garantir meu acesso antecipado →" }</button>
                    <div class="hero-rating">
                        <span class="hero-stars">{ "★★★★★" }</span>
                        <p class="hero-rating-note">{ "5.0 de aprovação no Beta" }</p>
                    </div>
                </div>
            </div>
            <div class="hero-image">
                <img
                    src="https://images.unsplash.com/photo-1549317661-bd32c8ce0db2?auto=format&fit=crop&q=80&w=1200"
                    alt="Plataforma Habilit"
                    loading="lazy"
                />
            </div>
        </header>
    }
}

#[function_component(PainPoints)]
fn pain_points() -> Html {
    html! {
        <section class="pain-points">
            <div class="section-header">
                <h2>{ "A jornada para sua CNH não precisa ser um peso" }</h2>
                <p>
                    { "Cansado de aulas genéricas, instrutores impacientes e horários rígidos \
                       na autoescola? Nós entendemos sua frustração." }
                </p>
            </div>
            <div class="card-grid">
                {
                    for PAIN_POINTS.iter().map(|item| html! {
                        <div class="pain-card">
                            <div class="card-icon">{ item.icon }</div>
                            <h3>{ item.title }</h3>
                            <p>{ item.description }</p>
                        </div>
                    })
                }
            </div>
        </section>
    }
}

#[function_component(Solution)]
fn solution() -> Html {
    html! {
        <section id="solucao" class="solution">
            <div class="solution-pitch">
                <span class="section-tag">{ "A Solução Habilit" }</span>
                <h2>{ "A ponte definitiva entre você e a sua liberdade." }</h2>
                <p>
                    { "O Habilit conecta você aos melhores instrutores credenciados através de \
                       um sistema inteligente de escolha por perfil, avaliações detalhadas e \
                       flexibilidade total de agenda." }
                </p>
                <ul class="feature-list">
                    {
                        for SOLUTION_BULLETS.iter().map(|text| html! {
                            <li>{ "✔️ " }{ *text }</li>
                        })
                    }
                </ul>
            </div>
            <div class="solution-cards">
                {
                    for SOLUTION_CARDS.iter().map(|card| html! {
                        <div class="solution-card">
                            <div class="card-icon">{ card.icon }</div>
                            <h4>{ card.title }</h4>
                            <p>{ card.description }</p>
                        </div>
                    })
                }
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    html! {
        <section id="como-funciona" class="how-it-works">
            <div class="section-header">
                <h2>{ "3 Passos para a sua Habilitação" }</h2>
                <p>{ "Sem complicações. Sem burocracia." }</p>
            </div>
            <div class="card-grid">
                {
                    for STEPS.iter().map(|step| html! {
                        <div class="step-card">
                            <span class="step-number">{ step.number }</span>
                            <h3>{ step.title }</h3>
                            <p>{ step.description }</p>
                        </div>
                    })
                }
            </div>
        </section>
    }
}

#[function_component(ForInstructors)]
fn for_instructors() -> Html {
    html! {
        <section id="instrutores" class="for-instructors">
            <div class="instructors-panel">
                <div class="instructors-pitch">
                    <h2>{ "É Instrutor? Fature mais e trabalhe no seu tempo." }</h2>
                    <p>
                        { "Nós cuidamos da captação de alunos e da burocracia. Você foca no que \
                           faz de melhor: ensinar com excelência." }
                    </p>
                    <div class="benefit-grid">
                        {
                            for INSTRUCTOR_BENEFITS.iter().map(|benefit| html! {
                                <div class="benefit-item">
                                    <div class="card-icon">{ benefit.icon }</div>
                                    <div>
                                        <h4>{ benefit.title }</h4>
                                        <p>{ benefit.description }</p>
                                    </div>
                                </div>
                            })
                        }
                    </div>
                    <button class="instructors-cta">{ "Quero ser Instrutor Habilit" }</button>
                </div>
                <div class="instructors-image">
                    <img
                        src="https://images.unsplash.com/photo-1449965408869-eaa3f722e40d?auto=format&fit=crop&q=80&w=800"
                        alt="Instrutor no carro"
                        loading="lazy"
                    />
                </div>
            </div>
        </section>
    }
}

#[function_component(FinalCta)]
fn final_cta() -> Html {
    html! {
        <section class="final-cta">
            <div class="final-cta-panel">
                <h2>
                    { "O volante está esperando " }
                    <span class="hero-highlight">{ "por você." }</span>
                </h2>
                <p>
                    { "Junte-se à lista VIP e receba um desconto exclusivo de 30% na sua \
                       primeira aula ao lançarmos oficialmente." }
                </p>
                <button class="hero-cta">{ "Quero garantir meu acesso antecipado" }</button>
                <p class="final-cta-note">{ "Lançamento em Breve • Disponível em todo Brasil" }</p>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = web_sys::js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="footer">
            <div class="footer-grid">
                <div class="footer-about">
                    <span class="footer-logo">{ "Habilit" }</span>
                    <p>
                        { "Estamos transformando a jornada de milhares de brasileiros rumo à \
                           CNH. Mais que um app, somos sua liberdade no trânsito." }
                    </p>
                </div>
                <div class="footer-column">
                    <h4>{ "Plataforma" }</h4>
                    <ul>
                        <li><a href="#solucao">{ "Para Alunos" }</a></li>
                        <li><a href="#instrutores">{ "Para Instrutores" }</a></li>
                        <li><a href="#">{ "Segurança" }</a></li>
                        <li><a href="#">{ "Novidades" }</a></li>
                    </ul>
                </div>
                <div class="footer-column">
                    <h4>{ "Empresa" }</h4>
                    <ul>
                        <li><a href="#">{ "Sobre Nós" }</a></li>
                        <li><a href="#">{ "Termos" }</a></li>
                        <li><a href="#">{ "Privacidade" }</a></li>
                        <li><a href="#">{ "Carreiras" }</a></li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{ format!("© {year} Habilit Tecnologia S/A. Feito com paixão no Brasil.") }</p>
                <p>{ "📍 Sede em São Paulo, SP" }</p>
            </div>
        </footer>
    }
}
