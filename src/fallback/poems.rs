//! The curated anthology. One poem per topic, eight verses each.

pub(super) const AMOR: &str = "\
No silêncio da noite estrelada,
O amor floresce como rosa delicada.
Entre suspiros e olhares trocados,
Nossos corações batem acelerados.

É fogo que acende, é luz que ilumina,
É força que move, verdade divina.
No amor encontro paz e abrigo,
E na tua mão, meu eterno destino.";

pub(super) const VIDA: &str = "\
A vida é rio que corre sem parar,
É sonho que nos faz despertar.
Entre alegrias e dores passageiras,
Construímos nossas próprias ribeiras.

Cada instante é precioso, cada momento sagrado,
No caminho incerto, seguimos lado a lado.
A vida nos ensina com suas marés,
A valorizar cada passo que dês.";

pub(super) const SAUDADE: &str = "\
Saudade é sentir que ainda estás,
Mesmo quando o tempo te levou para trás.
É memória viva, é dor que acalenta,
É ausência presente que não se ausenta.

Nos cantos da casa, nos ecos da voz,
Na música que tocava para nós dois.
Saudade é amar o que não mais existe,
É sorriso na lembrança, mesmo quando é triste.";

pub(super) const NATUREZA: &str = "\
Nas florestas verdes que tocam o céu,
A natureza escreve sua história sem véu.
Rios que cantam, montanhas que abraçam,
Nuvens que dançam quando os ventos passam.

A vida pulsa em cada pequena semente,
No rugido das feras, na chuva cadente.
Somos parte deste todo majestoso,
Divino poema, eterno e formoso.";

pub(super) const AMIZADE: &str = "\
Amizade é porto em mar agitado,
Abrigo seguro ao peito cansado.
É riso partilhado em tarde serena,
Mão que se estende quando a dor é pequena.

Nos dias escuros, é a luz acesa,
Na mesa farta, a melhor surpresa.
Tesouro que o tempo não desgasta,
Pois de amizade, nunca se diz basta.";

pub(super) const TEMPO: &str = "\
O tempo escorre por entre os dedos,
Levando consigo nossos segredos.
Relógio que nunca pede licença,
Transforma a espera em presença.

Ensina o tempo, mestre calado,
Que todo instante é um legado.
E ao passar, deixa no peito,
A lembrança do que foi perfeito.";

pub(super) const ESPERANCA: &str = "\
A esperança é semente adormecida,
Que aguarda a chuva para ganhar vida.
Brota no escuro, cresce na dor,
E floresce vestida de toda cor.

Quando tudo parece já perdido,
É ela o sussurro ao ouvido:
Amanhã o sol volta a nascer,
E contigo, um novo amanhecer.";

pub(super) const LIBERDADE: &str = "\
Liberdade é vento sem fronteira,
Ave que cruza a cordilheira.
É voz que não se deixa calar,
Passo firme em qualquer lugar.

Não há corrente que a detenha,
Nem muralha que a contenha.
Nasce livre o pensamento,
E voa além do firmamento.";

pub(super) const MAR: &str = "\
O mar guarda em suas profundezas,
Histórias, naufrágios e belezas.
Ondas que beijam a areia clara,
Espuma que o vento logo separa.

Imenso espelho do céu distante,
Canção salgada, eterna e constante.
Quem escuta o mar pela primeira vez,
Descobre a alma em sua vastidez.";
